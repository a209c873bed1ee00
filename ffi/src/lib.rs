//! C ABI for embedding tagdex in a host process.
//!
//! Two surfaces share the same engine type:
//!
//! - Handle API (`tagdex_*`): the host owns one opaque engine per session.
//! - Process-wide API (`load_tags`, `complete`, `delete_return_string`): a
//!   single default engine behind a mutex, for hosts that keep one
//!   autocomplete per process.
//!
//! Every string returned to the host is a NUL-terminated JSON array that the
//! host must hand back to the paired free function exactly once.

#![allow(non_camel_case_types)]

use std::ffi::{CStr, CString, c_char};
use std::ptr;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tagdex_search::Autocomplete;

/// Opaque engine handle.
#[repr(C)]
pub struct tagdex_engine {
    _private: [u8; 0],
}

impl tagdex_engine {
    fn from_internal(internal: Box<Autocomplete>) -> *mut Self {
        Box::into_raw(internal) as *mut Self
    }

    /// # Safety
    /// Pointer must have come from `from_internal`.
    unsafe fn into_internal(ptr: *mut Self) -> Box<Autocomplete> {
        unsafe { Box::from_raw(ptr as *mut Autocomplete) }
    }

    /// # Safety
    /// Pointer must be valid and from `from_internal`.
    unsafe fn as_internal<'a>(ptr: *const Self) -> &'a Autocomplete {
        unsafe { &*(ptr as *const Autocomplete) }
    }

    /// # Safety
    /// Pointer must be valid and from `from_internal`.
    unsafe fn as_internal_mut<'a>(ptr: *mut Self) -> &'a mut Autocomplete {
        unsafe { &mut *(ptr as *mut Autocomplete) }
    }
}

/// Borrows a host string as UTF-8.
///
/// # Safety
/// `ptr` must be NULL or a valid NUL-terminated C string.
unsafe fn borrow_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

/// Hands a string to the host. NULL if it cannot be represented.
fn into_host_string(value: String) -> *mut c_char {
    match CString::new(value) {
        Ok(s) => s.into_raw(),
        Err(error) => {
            tracing::error!(%error, "result contained an interior NUL");
            ptr::null_mut()
        }
    }
}

fn load(engine: &mut Autocomplete, csv: &str, match_start: i32) -> i64 {
    let report = engine.load(csv, match_start);
    i64::try_from(report.tags).unwrap_or(i64::MAX)
}

fn complete_json(engine: &mut Autocomplete, text: &str, new_query: i32) -> *mut c_char {
    match engine.query_json(text, new_query > 0) {
        Ok(json) => into_host_string(json),
        Err(error) => {
            tracing::error!(%error, "failed to serialize matches");
            ptr::null_mut()
        }
    }
}

/// Creates an engine with an empty catalog.
///
/// Free it with `tagdex_free`.
#[unsafe(no_mangle)]
pub extern "C" fn tagdex_new() -> *mut tagdex_engine {
    tagdex_engine::from_internal(Box::default())
}

/// Frees an engine. NULL is a no-op.
///
/// # Safety
/// * `engine` must be NULL or a handle from `tagdex_new`
/// * `engine` must not be used after this call
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagdex_free(engine: *mut tagdex_engine) {
    if !engine.is_null() {
        drop(unsafe { tagdex_engine::into_internal(engine) });
    }
}

/// Replaces the engine's catalog with the rows of `csv`.
///
/// A positive `match_start` selects prefix matching, otherwise substring
/// matching. Malformed rows are skipped.
///
/// # Returns
/// * Number of tags loaded
/// * -1 if a pointer is NULL or `csv` is not UTF-8 (engine unchanged)
///
/// # Safety
/// * `engine` must be a valid handle
/// * `csv` must be a valid NUL-terminated C string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagdex_load(
    engine: *mut tagdex_engine,
    csv: *const c_char,
    match_start: i32,
) -> i64 {
    if engine.is_null() {
        return -1;
    }
    let Some(csv) = (unsafe { borrow_str(csv) }) else {
        return -1;
    };

    load(unsafe { tagdex_engine::as_internal_mut(engine) }, csv, match_start)
}

/// Returns the next page of matches for `text` as a JSON array.
///
/// A positive `new_query` restarts the scan from the first tag; otherwise
/// the scan resumes where the previous call stopped.
///
/// # Returns
/// * JSON string, `[]` when nothing more matches (free with `tagdex_string_free`)
/// * NULL if a pointer is NULL, `text` is not UTF-8, or serialization failed
///
/// # Safety
/// * `engine` must be a valid handle
/// * `text` must be a valid NUL-terminated C string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagdex_complete(
    engine: *mut tagdex_engine,
    text: *const c_char,
    new_query: i32,
) -> *mut c_char {
    if engine.is_null() {
        return ptr::null_mut();
    }
    let Some(text) = (unsafe { borrow_str(text) }) else {
        return ptr::null_mut();
    };

    complete_json(unsafe { tagdex_engine::as_internal_mut(engine) }, text, new_query)
}

/// Returns 1 if the engine's session has scanned to the end of the catalog,
/// 0 if not, -1 for a NULL handle.
///
/// # Safety
/// * `engine` must be NULL or a valid handle
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagdex_is_exhausted(engine: *const tagdex_engine) -> i32 {
    if engine.is_null() {
        return -1;
    }
    i32::from(unsafe { tagdex_engine::as_internal(engine) }.is_exhausted())
}

/// Frees a string returned by this library. NULL is a no-op.
///
/// # Safety
/// * `ptr` must be NULL or a string returned by `tagdex_complete` or `complete`
/// * `ptr` must not be used after this call
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagdex_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}

static DEFAULT_ENGINE: LazyLock<Mutex<Autocomplete>> =
    LazyLock::new(|| Mutex::new(Autocomplete::default()));

fn default_engine() -> MutexGuard<'static, Autocomplete> {
    // Every mutation is a single swap, so a poisoned engine is still whole.
    DEFAULT_ENGINE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Loads `csv` into the process-wide engine. See `tagdex_load`.
///
/// # Safety
/// * `csv` must be a valid NUL-terminated C string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn load_tags(csv: *const c_char, match_start: i32) {
    let Some(csv) = (unsafe { borrow_str(csv) }) else {
        tracing::warn!("load_tags called with NULL or non-UTF-8 table");
        return;
    };

    load(&mut default_engine(), csv, match_start);
}

/// Queries the process-wide engine. See `tagdex_complete`.
///
/// Free the result with `delete_return_string`.
///
/// # Safety
/// * `text` must be a valid NUL-terminated C string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn complete(text: *const c_char, new_query: i32) -> *mut c_char {
    let Some(text) = (unsafe { borrow_str(text) }) else {
        return ptr::null_mut();
    };

    complete_json(&mut default_engine(), text, new_query)
}

/// Frees a string returned by `complete`.
///
/// # Safety
/// See `tagdex_string_free`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn delete_return_string(ptr: *mut c_char) {
    unsafe { tagdex_string_free(ptr) }
}
