mod common;
use common::*;
use homebasic::mach::Runtime;

fn sample(r: &mut Runtime, h: &mut TestHost) {
    enter_all(r, h, &["20 put 1", "10 print \"hi\""]);
}

#[test]
fn test_save_sends_records_in_order() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    sample(&mut r, &mut h);
    assert_eq!(exec(&mut r, &mut h, "save \"p\""), "Saving.....\nReady.\n");
    assert_eq!(
        h.sent,
        vec!["*SAVE \"p\"", "10 print \"hi\"", "20 put 1", "*EOF"]
    );
    assert_eq!(
        h.stored("p"),
        Some(vec!["10 print \"hi\"".to_string(), "20 put 1".to_string()])
    );
}

#[test]
fn test_save_then_load_round_trip() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    sample(&mut r, &mut h);
    let listed = exec(&mut r, &mut h, "list");
    exec(&mut r, &mut h, "save \"p\"");
    exec(&mut r, &mut h, "new");
    assert!(r.listing().is_empty());
    h.sent.clear();
    assert_eq!(exec(&mut r, &mut h, "load \"p\""), "Loading.....\nReady.\n");
    assert_eq!(h.sent, vec!["*LOAD \"p\"", "*NEXT", "*NEXT", "*NEXT"]);
    assert_eq!(exec(&mut r, &mut h, "list"), listed);
}

#[test]
fn test_empty_program_round_trip() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    assert_eq!(exec(&mut r, &mut h, "save \"p\""), "Saving...\nReady.\n");
    assert_eq!(h.stored("p"), Some(vec![]));
    exec(&mut r, &mut h, "10 put 1");
    assert_eq!(exec(&mut r, &mut h, "load \"p\""), "Loading...\nReady.\n");
    assert!(r.listing().is_empty());
}

#[test]
fn test_load_replaces_program_and_variables() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    h.file("p", &["10 put 1"]);
    enter_all(&mut r, &mut h, &["99 put 9", "let a = 1"]);
    exec(&mut r, &mut h, "load \"p\"");
    assert_eq!(exec(&mut r, &mut h, "put a"), "Variable not found!\n");
    assert_eq!(exec(&mut r, &mut h, "list"), "10 put 1\nReady.\n");
}

#[test]
fn test_load_missing_file() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    assert_eq!(
        exec(&mut r, &mut h, "load \"nothing\""),
        "Loading...\nFile not found!\n"
    );
    assert!(r.is_error());
}

#[test]
fn test_load_reports_bad_lines_and_continues() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    h.file("bad", &["10 put 1", "20 fly", "30 put 3", "40"]);
    assert_eq!(
        exec(&mut r, &mut h, "load \"bad\""),
        "Loading.....\nUnknown command!\n..\n"
    );
    assert!(r.is_error());
    assert_eq!(exec(&mut r, &mut h, "list"), "10 put 1\n30 put 3\nReady.\n");
}

#[test]
fn test_load_rejects_direct_statements() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    h.file("direct", &["print 1"]);
    assert_eq!(
        exec(&mut r, &mut h, "load \"direct\""),
        "Loading....\nSyntax error! (direct statement in file)\n\n"
    );
    assert!(r.listing().is_empty());
}

#[test]
fn test_dir_lists_names() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    h.file("b.bas", &[]);
    h.file("a.bas", &["10 cls"]);
    assert_eq!(exec(&mut r, &mut h, "dir"), "a.bas\nb.bas\nReady.\n");
    assert_eq!(h.sent, vec!["*DIR", "*NEXT", "*NEXT", "*NEXT"]);
}

#[test]
fn test_dir_cancel_sends_break() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    h.file("a.bas", &[]);
    h.file("b.bas", &[]);
    h.interrupt = Some(r.interrupt());
    h.break_after = Some(2);
    assert_eq!(exec(&mut r, &mut h, "dir"), "a.bas\nInterrupted.\n");
    assert_eq!(h.sent, vec!["*DIR", "*NEXT", "*BREAK"]);
}

#[test]
fn test_save_cancel_sends_break() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    sample(&mut r, &mut h);
    h.interrupt = Some(r.interrupt());
    h.break_after = Some(2);
    assert_eq!(exec(&mut r, &mut h, "save \"p\""), "Saving....\nInterrupted.\n");
    assert_eq!(h.sent.last().map(String::as_str), Some("*BREAK"));
    assert_eq!(h.stored("p"), None);
}

#[test]
fn test_load_cancel_sends_break() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    h.file("p", &["10 put 1", "20 put 2", "30 put 3"]);
    h.interrupt = Some(r.interrupt());
    h.break_after = Some(2);
    assert_eq!(exec(&mut r, &mut h, "load \"p\""), "Loading....\nInterrupted.\n");
    assert_eq!(h.sent, vec!["*LOAD \"p\"", "*NEXT", "*BREAK"]);
    assert_eq!(r.listing().len(), 1);
}

#[test]
fn test_broken_link() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    sample(&mut r, &mut h);
    h.broken = true;
    assert_eq!(
        exec(&mut r, &mut h, "save \"p\""),
        "Saving...\nTransfer error! (link down)\n"
    );
    assert_eq!(exec(&mut r, &mut h, "dir"), "Transfer error! (link down)\n");
    assert!(r.is_error());
    assert_eq!(r.listing().len(), 2);
}

#[test]
fn test_bad_filenames() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    sample(&mut r, &mut h);
    assert_eq!(exec(&mut r, &mut h, "save p"), "String expected!\n");
    assert_eq!(exec(&mut r, &mut h, "load \"p"), "Malformed string argument!\n");
    assert_eq!(r.listing().len(), 2);
    assert!(h.sent.is_empty());
}
