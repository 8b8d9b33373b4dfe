//! Contents of every file emitted into a new project.
//!
//! All templates are fixed strings with the project name, compiler and
//! flags interpolated; nothing here touches the filesystem.

use crate::config::{BuildSystem, Language, Linking, ResolvedConfig, Strictness};
use crate::constants::{BUILD_DIR, SOURCE_DIR};

const C_MAIN: &str = r#"#include <stdio.h>

int main() {
    printf("Hello, World!\n");
    return 0;
}
"#;

const CPP_MAIN: &str = r#"#include <iostream>

int main() {
    std::cout << "Hello, World!" << std::endl;
    return 0;
}
"#;

const CPP_TEST: &str = r#"#include <iostream>
#include <cassert>

int main() {
    // Sample test: basic assertion
    assert(1 == 1);
    std::cout << "Test passed!" << std::endl;
    return 0;
}
"#;

const GITIGNORE: &str = "\
# Compiled object files
*.o

# Precompiled Headers
*.gch

# Libraries
*.lib
*.a
*.so

# Executables
build/

# CMake Files
CMakeFiles/
CMakeCache.txt
cmake_install.cmake
Makefile
";

/// Starter source file for `language`.
pub fn main_source(language: Language) -> &'static str {
    match language {
        Language::C => C_MAIN,
        Language::Cpp => CPP_MAIN,
    }
}

/// Minimal assertion-based smoke test.
pub fn test_source() -> &'static str {
    CPP_TEST
}

pub fn gitignore() -> &'static str {
    GITIGNORE
}

/// Flags between the compiler and `-g`, each with a leading space.
fn extra_flags(strictness: Strictness, linking: Linking) -> String {
    strictness
        .flags()
        .iter()
        .copied()
        .chain(linking.flag())
        .map(|flag| format!(" {flag}"))
        .collect()
}

/// Compiler invocation used by the Makefile `build` target.
pub fn compile_command(config: &ResolvedConfig, name: &str) -> String {
    format!(
        "{compiler}{flags} -g {std} -o {BUILD_DIR}/{name} {SOURCE_DIR}/{main}",
        compiler = config.compiler,
        flags = extra_flags(config.strictness, config.linking),
        std = config.language.std_flag(),
        main = config.language.main_file(),
    )
}

/// Makefile with `build`, `run` and `clear` targets.
pub fn makefile(config: &ResolvedConfig, name: &str) -> String {
    format!(
        ".PHONY: build run clear\n\n\
         build:\n\t{command}\n\n\
         run: build\n\t./{BUILD_DIR}/{name}\n\n\
         clear:\n\t@rm -f {BUILD_DIR}/{name}\n",
        command = compile_command(config, name),
    )
}

/// CMakeLists.txt mirroring the Makefile's flags.
pub fn cmake_lists(config: &ResolvedConfig, name: &str) -> String {
    let (lang, std) = match config.language {
        Language::C => ("C", "11"),
        Language::Cpp => ("CXX", "23"),
    };

    let mut out = String::new();
    out.push_str("cmake_minimum_required(VERSION 3.10)\n");
    out.push_str(&format!("project({name})\n"));
    out.push_str(&format!("enable_language({lang})\n"));
    out.push_str("set(CMAKE_BUILD_TYPE Debug)\n");
    out.push_str("set(CMAKE_EXPORT_COMPILE_COMMANDS ON)\n");

    let flags = config.strictness.flags();
    if !flags.is_empty() {
        out.push_str(&format!(
            "set(CMAKE_{lang}_FLAGS \"${{CMAKE_{lang}_FLAGS}} {}\")\n",
            flags.join(" ")
        ));
    }
    out.push_str(&format!("set(CMAKE_{lang}_STANDARD {std})\n"));
    out.push_str(&format!("set(CMAKE_{lang}_STANDARD_REQUIRED ON)\n"));

    out.push_str(&format!(
        "add_executable({name} {SOURCE_DIR}/{})\n",
        config.language.main_file()
    ));
    out.push_str(&format!("target_include_directories({name} PRIVATE inc)\n"));
    if let Some(flag) = config.linking.flag() {
        out.push_str(&format!(
            "set_target_properties({name} PROPERTIES LINK_FLAGS \"{flag}\")\n"
        ));
    }
    if config.emits_tests() {
        out.push_str("enable_testing()\n");
        out.push_str("add_subdirectory(test)\n");
    }
    out
}

/// Build manifest for the configured build system.
pub fn build_manifest(config: &ResolvedConfig, name: &str) -> String {
    match config.build_system {
        BuildSystem::Make => makefile(config, name),
        BuildSystem::CMake => cmake_lists(config, name),
    }
}

pub fn readme(config: &ResolvedConfig, name: &str) -> String {
    let mut out = format!("# {name}\n\n## Build Instructions\n\n");

    match config.build_system {
        BuildSystem::Make => out.push_str(
            "To compile the project using Make, run:\n\n\
             ```\nmake build\n```\n\n\
             To run the project, run:\n\n\
             ```\nmake run\n```\n\n\
             To clean the built binary, run:\n\n\
             ```\nmake clear\n```\n\n",
        ),
        BuildSystem::CMake => out.push_str(&format!(
            "To compile the project using CMake, run:\n\n\
             ```\ncmake -B build\ncmake --build build\n```\n\n\
             To run the project, run:\n\n\
             ```\n./{BUILD_DIR}/{name}\n```\n\n"
        )),
    }

    if config.emits_docs() {
        out.push_str(
            "## Documentation\n\n\
             Generate documentation with Doxygen:\n\n\
             ```\ndoxygen Doxyfile\n```\n\n",
        );
    }
    if config.emits_tests() {
        out.push_str("## Running Tests\n\nRun tests with:\n\n```\nctest\n```\n\n");
    }
    out
}

/// Doxygen configuration; LaTeX output is disabled.
pub fn doxyfile(name: &str) -> String {
    format!(
        "PROJECT_NAME = \"{name}\"\n\
         INPUT = {SOURCE_DIR}/main.cpp\n\
         OUTPUT_DIRECTORY = docs\n\
         GENERATE_LATEX = NO\n"
    )
}
