//! Command-line interface implementation for cini.
//!
//! Two grammars are accepted and auto-detected: if any argument starts with
//! `--` the whole invocation is parsed as flags, otherwise every argument is
//! taken positionally. Both grammars are parsed with clap after the raw
//! argument list has been normalized.

use clap::Parser;
use log::{debug, warn};

use crate::config::{BuildSystem, Language, Linking, ResolvedConfig, Strictness};
use crate::constants::{FLAG_PREFIX, YES};
use crate::error::{Error, Result};

pub const USAGE: &str = "\
Usage (positional): cini <project_name> [linking] [language] [compiler] [strict_compiler] [build_system] [init_git_repo] [documentation] [test]
Or use flagged mode:
  cini [project_name or --name=<name>] [--link=static|dynamic] [--lang=c++|c] [--compiler=clang++|...]
       [--strict=0|1|2] [--build=cmake|make] [--git|--no-git] [--docs|--no-docs] [--test] [--verbose]
";

/// Flags taking a value, written as `--flag=value`.
const VALUE_FLAGS: [&str; 6] = ["name", "link", "lang", "compiler", "strict", "build"];

/// Flags taking no value.
const SWITCHES: [&str; 6] = ["git", "no-git", "docs", "no-docs", "test", "verbose"];

/// Which grammar an invocation is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Flagged,
    Positional,
}

/// Flag mode arguments.
#[derive(Parser, Debug)]
#[command(name = "cini", about = "cini: C/C++ project scaffolding tool", args_override_self = true)]
pub struct FlaggedArgs {
    /// Project name or path
    #[arg(long)]
    pub name: Option<String>,

    /// Linking mode (static or dynamic)
    #[arg(long)]
    pub link: Option<String>,

    /// Project language (c++ or c)
    #[arg(long)]
    pub lang: Option<String>,

    /// Compiler used by the generated build manifest
    #[arg(long)]
    pub compiler: Option<String>,

    /// Warning strictness (0, 1 or 2)
    #[arg(long)]
    pub strict: Option<String>,

    /// Build system (cmake or make)
    #[arg(long)]
    pub build: Option<String>,

    /// Initialize a git repository
    #[arg(long, overrides_with = "no_git")]
    pub git: bool,

    /// Skip git repository initialization
    #[arg(long, overrides_with = "git")]
    pub no_git: bool,

    /// Generate documentation files
    #[arg(long, overrides_with = "no_docs")]
    pub docs: bool,

    /// Skip documentation files
    #[arg(long, overrides_with = "docs")]
    pub no_docs: bool,

    /// Generate a test scaffold
    #[arg(long)]
    pub test: bool,

    /// Enable verbose logging output
    #[arg(long)]
    pub verbose: bool,

    /// Bare tokens; the first one names the project when --name is absent
    #[arg(value_name = "PROJECT")]
    pub bare: Vec<String>,
}

/// Positional mode arguments, in their fixed order.
#[derive(Parser, Debug)]
#[command(name = "cini", about = "cini: C/C++ project scaffolding tool")]
pub struct PositionalArgs {
    #[arg(value_name = "PROJECT")]
    pub project: String,

    #[arg(value_name = "LINKING")]
    pub linking: Option<String>,

    #[arg(value_name = "LANGUAGE")]
    pub language: Option<String>,

    #[arg(value_name = "COMPILER")]
    pub compiler: Option<String>,

    #[arg(value_name = "STRICT")]
    pub strict: Option<String>,

    #[arg(value_name = "BUILD")]
    pub build: Option<String>,

    #[arg(value_name = "GIT")]
    pub git: Option<String>,

    #[arg(value_name = "DOCS")]
    pub docs: Option<String>,

    #[arg(value_name = "TEST")]
    pub test: Option<String>,

    #[arg(hide = true)]
    pub extra: Vec<String>,
}

/// Flag mode applies to the whole invocation as soon as one argument is a flag.
pub fn detect_grammar<S: AsRef<str>>(args: &[S]) -> Grammar {
    if args.iter().any(|arg| arg.as_ref().starts_with(FLAG_PREFIX)) {
        Grammar::Flagged
    } else {
        Grammar::Positional
    }
}

/// Returns true when verbose logging was requested.
///
/// Checked before parsing so that parse warnings are already visible.
pub fn wants_verbose<S: AsRef<str>>(args: &[S]) -> bool {
    detect_grammar(args) == Grammar::Flagged && args.iter().any(|arg| arg.as_ref() == "--verbose")
}

fn is_known_flag(arg: &str) -> bool {
    let Some(flag) = arg.strip_prefix(FLAG_PREFIX) else {
        return false;
    };
    SWITCHES.contains(&flag)
        || VALUE_FLAGS.iter().any(|name| {
            flag.strip_prefix(name).is_some_and(|rest| rest.starts_with('='))
        })
}

/// Reorders flag mode arguments for clap: known flags first, then `--`,
/// then bare tokens in their original order. Unknown flags are dropped.
fn normalize_flagged<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    let mut flags = vec!["cini".to_string()];
    let mut bare = Vec::new();

    for arg in args.iter().map(|arg| arg.as_ref()) {
        if is_known_flag(arg) {
            flags.push(arg.to_string());
        } else if arg.starts_with(FLAG_PREFIX) {
            warn!("Ignoring unrecognized argument '{arg}'");
        } else {
            bare.push(arg.to_string());
        }
    }

    flags.push(FLAG_PREFIX.to_string());
    flags.extend(bare);
    flags
}

/// Parses flag mode arguments into a configuration.
pub fn parse_flagged<S: AsRef<str>>(args: &[S]) -> Result<ResolvedConfig> {
    let parsed = FlaggedArgs::try_parse_from(normalize_flagged(args))?;

    let mut bare = parsed.bare.into_iter().filter(|token| !token.is_empty());
    let project = match parsed.name.filter(|name| !name.is_empty()) {
        Some(name) => name,
        None => bare.next().ok_or(Error::MissingProjectName)?,
    };
    for ignored in bare {
        warn!("Ignoring extra argument '{ignored}'");
    }

    let mut config = ResolvedConfig::new(project);
    if let Some(link) = parsed.link {
        config.linking = Linking::from_arg(&link);
    }
    if let Some(lang) = parsed.lang {
        config.language = Language::from_arg(&lang);
    }
    if let Some(compiler) = parsed.compiler {
        config.compiler = compiler;
    }
    if let Some(strict) = parsed.strict {
        config.strictness = Strictness::from_arg(&strict)?;
    }
    if let Some(build) = parsed.build {
        config.build_system = BuildSystem::from_arg(&build);
    }
    config.init_git = !parsed.no_git;
    config.with_docs = !parsed.no_docs;
    config.with_tests = parsed.test;

    Ok(config)
}

/// Parses positional mode arguments into a configuration.
///
/// An absent yes/no slot keeps its default, a present one is enabled only by
/// the literal `yes`.
pub fn parse_positional<S: AsRef<str>>(args: &[S]) -> Result<ResolvedConfig> {
    let mut argv = vec!["cini".to_string(), FLAG_PREFIX.to_string()];
    argv.extend(args.iter().map(|arg| arg.as_ref().to_string()));
    let parsed = PositionalArgs::try_parse_from(argv)?;

    if parsed.project.is_empty() {
        return Err(Error::MissingProjectName);
    }
    for ignored in &parsed.extra {
        warn!("Ignoring extra argument '{ignored}'");
    }

    let mut config = ResolvedConfig::new(parsed.project);
    if let Some(linking) = parsed.linking {
        config.linking = Linking::from_arg(&linking);
    }
    if let Some(language) = parsed.language {
        config.language = Language::from_arg(&language);
    }
    if let Some(compiler) = parsed.compiler {
        config.compiler = compiler;
    }
    if let Some(strict) = parsed.strict {
        config.strictness = Strictness::from_arg(&strict)?;
    }
    if let Some(build) = parsed.build {
        config.build_system = BuildSystem::from_arg(&build);
    }
    config.init_git = parsed.git.map_or(true, |value| value == YES);
    config.with_docs = parsed.docs.map_or(true, |value| value == YES);
    config.with_tests = parsed.test.map_or(false, |value| value == YES);

    Ok(config)
}

/// Resolves the raw argument list (without the program name) into a configuration.
///
/// # Errors
/// * `Error::MissingArguments` if no argument was given
/// * `Error::MissingProjectName` if flag mode names no project
/// * `Error::InvalidStrictness` if the strictness token is not an integer
pub fn resolve_config<S: AsRef<str>>(args: &[S]) -> Result<ResolvedConfig> {
    if args.is_empty() {
        return Err(Error::MissingArguments);
    }

    let grammar = detect_grammar(args);
    debug!("Parsing arguments in {grammar:?} mode");

    let config = match grammar {
        Grammar::Flagged => parse_flagged(args)?,
        Grammar::Positional => parse_positional(args)?,
    };
    debug!("Resolved configuration: {}", config.to_json());

    Ok(config)
}
