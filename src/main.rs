// SPDX-License-Identifier: MPL-2.0
use env_logger::Env;
use photo_uploader::app::{self, paths, Flags};
use photo_uploader::wizard::Variant;

const HELP: &str = "\
Photo Uploader

USAGE:
  photo_uploader [OPTIONS] [IMAGE]

OPTIONS:
  -h, --help               Print this help
  --lang <TAG>             Interface language (e.g. en-US, he)
  --variant <NAME>         Wizard variant: classic or gated
  --config-dir <DIR>       Directory holding settings.toml
  --data-dir <DIR>         Directory holding state.cbor

ARGS:
  [IMAGE]                  Image to preselect on startup
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let variant: Option<Variant> = args.opt_value_from_str("--variant")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;

    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        variant,
        file_path,
        data_dir,
        config_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn parses_variant_lang_and_image() {
        let flags = parse_flags(args(&["--variant", "gated", "--lang", "he", "img.png"]))
            .expect("valid flags");
        assert_eq!(flags.variant, Some(Variant::Gated));
        assert_eq!(flags.lang.as_deref(), Some("he"));
        assert_eq!(flags.file_path.as_deref(), Some("img.png"));
        assert!(flags.config_dir.is_none());
        assert!(flags.data_dir.is_none());
    }

    #[test]
    fn parses_directory_overrides() {
        let flags = parse_flags(args(&["--config-dir", "/tmp/cfg", "--data-dir", "/tmp/data"]))
            .expect("valid flags");
        assert_eq!(flags.config_dir.as_deref(), Some("/tmp/cfg"));
        assert_eq!(flags.data_dir.as_deref(), Some("/tmp/data"));
        assert!(flags.file_path.is_none());
        assert!(flags.variant.is_none());
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(parse_flags(args(&["--variant", "fancy"])).is_err());
    }
}
