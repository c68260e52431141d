//! Logging that goes to the browser console under wasm and to stderr natively.

#[cfg(target_arch = "wasm32")]
mod sink {
    use wasm_bindgen::JsValue;

    pub fn info(message: &str) {
        web_sys::console::log_1(&JsValue::from_str(message));
    }

    pub fn warn(message: &str) {
        web_sys::console::warn_1(&JsValue::from_str(message));
    }

    pub fn error(message: &str) {
        web_sys::console::error_1(&JsValue::from_str(message));
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    pub fn info(message: &str) {
        eprintln!("[info] {}", message);
    }

    pub fn warn(message: &str) {
        eprintln!("[warn] {}", message);
    }

    pub fn error(message: &str) {
        eprintln!("[error] {}", message);
    }
}

const TARGET: &str = "territory-planner";

pub fn info(message: impl AsRef<str>) {
    sink::info(&format!("{}: {}", TARGET, message.as_ref()));
}

pub fn warn(message: impl AsRef<str>) {
    sink::warn(&format!("{}: {}", TARGET, message.as_ref()));
}

pub fn error(message: impl AsRef<str>) {
    sink::error(&format!("{}: {}", TARGET, message.as_ref()));
}
