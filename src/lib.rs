//! pictolib — arrow placement and orientation engine for KineScribe pictographs.
//!
//! Each beat of the notation encodes two props' motions. Given a
//! pictograph (both motions plus the letter), the engine computes where
//! and how each prop's arrow glyph is drawn: the grid location, the
//! rotation angle in degrees, a pixel-space adjustment resolved through a
//! two-tier (special then default) placement lookup mirrored across the
//! four grid quadrants, and the end orientation the next beat starts
//! from.
//!
//! # Example
//! ```no_run
//! use pictolib::{calculate_pictograph, PictographData, PlacementTables};
//!
//! let tables = PlacementTables::load_from_dir("path/to/placements").unwrap();
//! let json = std::fs::read_to_string("pictograph.json").unwrap();
//! let pictograph: PictographData = serde_json::from_str(&json).unwrap();
//!
//! let placements = calculate_pictograph(&pictograph, &tables).unwrap();
//! println!("blue arrow at {:?}", placements.blue.location);
//! println!("red arrow rotated {}°", placements.red.rotation_angle);
//! ```

pub mod engine;
pub mod error;
pub mod loader;
pub mod model;

#[cfg(target_os = "android")]
pub mod android;

pub use engine::{calculate_arrow, calculate_pictograph};
pub use error::EngineError;
pub use loader::PlacementTables;
pub use model::*;

/// Parse a pictograph from JSON, compute both props' placements, and
/// return them as JSON. Useful for passing data across FFI boundaries.
pub fn calculate_pictograph_json(
    json: &str,
    tables: &PlacementTables,
) -> Result<String, EngineError> {
    let pictograph: PictographData = serde_json::from_str(json)?;
    let placements = calculate_pictograph(&pictograph, tables)?;
    Ok(serde_json::to_string(&placements)?)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::sync::OnceLock;

/// Process-wide placement tables, loaded once before any calculation.
static TABLES: OnceLock<PlacementTables> = OnceLock::new();

/// Load the process-wide tables, once. Returns true when tables are
/// resident afterwards. Shared by the C and JNI entry points.
pub(crate) fn load_global_tables(dir: &str) -> bool {
    if TABLES.get().is_some() {
        return true;
    }
    match PlacementTables::load_from_dir(dir) {
        Ok(tables) => TABLES.set(tables).is_ok() || TABLES.get().is_some(),
        Err(_) => false,
    }
}

pub(crate) fn global_tables() -> Option<&'static PlacementTables> {
    TABLES.get()
}

/// Load the placement tables from a data directory. Must be called once
/// before `pictolib_calculate`; later calls are ignored (tables are
/// immutable after load).
///
/// Returns `true` when tables are resident.
///
/// # Safety
/// `dir` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn pictolib_load_placements(dir: *const c_char) -> bool {
    if dir.is_null() {
        return false;
    }
    let c_str = unsafe { CStr::from_ptr(dir) };
    let dir_str = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return false,
    };

    load_global_tables(dir_str)
}

/// Compute both props' placements for a pictograph JSON string and
/// return the result as a JSON C string. The caller must free the
/// returned string with `pictolib_free_string`.
///
/// Returns null if the tables were never loaded or the input is invalid.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn pictolib_calculate(json: *const c_char) -> *mut c_char {
    if json.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(json) };
    let json_str = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let Some(tables) = global_tables() else {
        return std::ptr::null_mut();
    };

    match calculate_pictograph_json(json_str, tables) {
        Ok(out) => CString::new(out).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by pictolib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a pictolib function, or null.
#[no_mangle]
pub unsafe extern "C" fn pictolib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
