macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod decompose_ops;
pub mod morph_ops;
pub mod read_ops;

use akshara_core::Script;

/// Resolve an explicit script code, or detect the script from `text`.
pub(crate) fn resolve_script(code: Option<&str>, text: &str) -> Script {
    match code {
        Some(code) => die!(code.parse::<Script>(), "Error: {}"),
        None => Script::detect(text).unwrap_or_else(|| {
            eprintln!("Error: no supported script in {text:?} (use --script kn|ml|bn)");
            std::process::exit(1);
        }),
    }
}
