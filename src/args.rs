//! Command-line parsing.
//!
//! The whole interface is one optional file name plus `-help`, so it is parsed by hand.

use std::ffi::{OsStr, OsString};

use crate::{
    error::{ErrorKind, ResizeError},
    plan::ResizeJob,
    rz_err,
};

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    PrintHelp,
    Resize(ResizeJob),
}

pub fn parse_args(args: Vec<OsString>) -> Result<Command, ResizeError> {
    let mut path: Option<OsString> = None;

    for arg in args.into_iter().skip(1) {
        // skip argv[0], path to our binary
        if is_help(&arg) {
            return Ok(Command::PrintHelp);
        }
        if looks_like_option(&arg) {
            return Err(rz_err!(
                ErrorKind::Usage,
                "unrecognized option `{}'",
                arg.to_string_lossy()
            ));
        }
        if let Some(previous) = &path {
            return Err(rz_err!(
                ErrorKind::Usage,
                "expected a single image file, got `{}' and `{}'",
                previous.to_string_lossy(),
                arg.to_string_lossy()
            ));
        }
        path = Some(arg);
    }

    Ok(Command::Resize(match path {
        Some(path) => ResizeJob::for_path(path),
        None => ResizeJob::default(),
    }))
}

fn is_help(arg: &OsStr) -> bool {
    ["-h", "-?", "-help", "--help", "-usage"]
        .iter()
        .any(|flag| arg == OsStr::new(flag))
}

/// Anything starting with `-` is an option, except a lone `-`, which is taken as a file name
fn looks_like_option(arg: &OsStr) -> bool {
    let bytes = arg.as_encoded_bytes();
    bytes.first() == Some(&b'-') && bytes.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    fn args(list: &[&str]) -> Vec<OsString> {
        std::iter::once("resize-in-place")
            .chain(list.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn no_arguments_means_the_default_file() {
        let command = parse_args(args(&[])).unwrap();
        assert_eq!(command, Command::Resize(ResizeJob::default()));
    }

    #[test]
    fn single_path() {
        let Command::Resize(job) = parse_args(args(&["shots/face.jpg"])).unwrap() else {
            panic!("expected a resize job");
        };
        assert_eq!(job.path, Path::new("shots/face.jpg"));
        assert_eq!((job.width, job.height), (750, 421));
    }

    #[test]
    fn help_wins_wherever_it_is() {
        for flag in ["-h", "-?", "-help", "--help", "-usage"] {
            assert_eq!(parse_args(args(&[flag])).unwrap(), Command::PrintHelp);
            assert_eq!(
                parse_args(args(&["a.png", flag])).unwrap(),
                Command::PrintHelp
            );
        }
    }

    #[test]
    fn unknown_option_is_rejected() {
        let err = parse_args(args(&["-resize", "10x10"])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Usage);
        assert!(err.message.starts_with("unrecognized option `-resize'"));
    }

    #[test]
    fn two_paths_are_rejected() {
        let err = parse_args(args(&["a.png", "b.png"])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Usage);
    }
}
