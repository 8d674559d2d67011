// C ABI for hosts that walk their own document tree and hand each text
// node or attribute value to the engine.
use crate::config::Config;
use crate::core::engine::Transliterator;
use crate::core::types::Direction;
use crate::error::{Error, Result};
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::sync::OnceLock;
use tracing::{debug, error, warn};

static TRANSLITERATOR: OnceLock<Transliterator> = OnceLock::new();

fn engine() -> &'static Transliterator {
    TRANSLITERATOR.get_or_init(Transliterator::default)
}

unsafe fn read_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(Error::InvalidArgument(format!("{what} is null")));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|e| Error::InvalidArgument(format!("{what} is not UTF-8: {e}")))
}

/// Configures the shared engine from a JSON object. A null pointer selects
/// the defaults. Returns false if the config is invalid or the engine was
/// already in use with a different config.
///
/// # Safety
/// `config_json` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn srb_translit_init(config_json: *const c_char) -> bool {
    let result = catch_unwind(AssertUnwindSafe(|| -> Result<bool> {
        let config = if config_json.is_null() {
            Config::default()
        } else {
            Config::from_json(read_str(config_json, "config")?)?
        };
        if let Some(existing) = TRANSLITERATOR.get() {
            return Ok(existing.config() == &config);
        }
        let installed = TRANSLITERATOR.get_or_init(|| Transliterator::new(config.clone()));
        debug!("shared transliterator initialized");
        Ok(installed.config() == &config)
    }));
    match result {
        Ok(Ok(ok)) => ok,
        Ok(Err(e)) => {
            warn!(error = %e, "srb_translit_init failed");
            false
        }
        Err(_) => {
            error!("panic in srb_translit_init");
            false
        }
    }
}

unsafe fn convert(text: *const c_char, direction: Direction) -> *mut c_char {
    let result = catch_unwind(AssertUnwindSafe(|| -> Result<CString> {
        let input = read_str(text, "text")?;
        let output = engine().transliterate(input, direction);
        CString::new(output)
            .map_err(|e| Error::InvalidArgument(format!("output contains NUL: {e}")))
    }));
    match result {
        Ok(Ok(s)) => s.into_raw(),
        Ok(Err(e)) => {
            warn!(error = %e, %direction, "conversion rejected");
            ptr::null_mut()
        }
        Err(_) => {
            error!(%direction, "panic during conversion");
            ptr::null_mut()
        }
    }
}

/// Returns a newly allocated Cyrillic string, or null on invalid input.
/// Free the result with [`srb_translit_free_string`].
///
/// # Safety
/// `text` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn srb_translit_to_cyrillic(text: *const c_char) -> *mut c_char {
    convert(text, Direction::LatinToCyrillic)
}

/// Returns a newly allocated Latin string, or null on invalid input.
///
/// # Safety
/// `text` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn srb_translit_to_latin(text: *const c_char) -> *mut c_char {
    convert(text, Direction::CyrillicToLatin)
}

/// # Safety
/// `s` must be null or a pointer returned by this library, freed at most once.
#[no_mangle]
pub unsafe extern "C" fn srb_translit_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
