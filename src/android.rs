//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jboolean, jstring, JNI_FALSE, JNI_TRUE};
use jni::JNIEnv;

use crate::{calculate_pictograph_json, global_tables, load_global_tables};

/// Load the placement tables from a data directory.
///
/// Called from Kotlin as:
///   external fun loadPlacements(dir: String): Boolean
#[no_mangle]
pub extern "system" fn Java_com_kinescribe_app_PictoLib_loadPlacements(
    mut env: JNIEnv,
    _class: JClass,
    dir: JString,
) -> jboolean {
    let dir_str: String = match env.get_string(&dir) {
        Ok(s) => s.into(),
        Err(_) => return JNI_FALSE,
    };

    if load_global_tables(&dir_str) {
        JNI_TRUE
    } else {
        JNI_FALSE
    }
}

/// Compute both props' placements for a pictograph JSON string.
///
/// Called from Kotlin as:
///   external fun calculate(pictographJson: String): String?
#[no_mangle]
pub extern "system" fn Java_com_kinescribe_app_PictoLib_calculate(
    mut env: JNIEnv,
    _class: JClass,
    pictograph_json: JString,
) -> jstring {
    let json: String = match env.get_string(&pictograph_json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let Some(tables) = global_tables() else {
        return std::ptr::null_mut();
    };

    match calculate_pictograph_json(&json, tables) {
        Ok(out) => match env.new_string(&out) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}
