//! The engine core is pure choreography: no rendering framework, no
//! terminal I/O, no blocking sleeps. These tests scan its sources so a
//! stray dependency shows up as a test failure rather than a code review
//! comment.

use std::fs;

use architectural_enforcement::source_files;

#[test]
fn core_has_no_rendering_dependencies() {
    let forbidden = ["ratatui", "crossterm"];
    for path in source_files("engine/core/src") {
        let source = fs::read_to_string(&path).unwrap();
        for needle in forbidden {
            assert!(
                !source.contains(needle),
                "{} references {needle}; rendering belongs in the tui crate",
                path.display()
            );
        }
    }
}

#[test]
fn core_never_sleeps() {
    for path in source_files("engine/core/src") {
        let source = fs::read_to_string(&path).unwrap();
        assert!(
            !source.contains("thread::sleep"),
            "{} sleeps; frame pacing belongs to the host",
            path.display()
        );
    }
}

#[test]
fn core_sources_exist() {
    assert!(
        !source_files("engine/core/src").is_empty(),
        "scan found no core sources; the path layout changed"
    );
}
