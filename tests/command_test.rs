mod common;
use common::*;
use homebasic::mach::Runtime;

fn numbered(r: &mut Runtime, h: &mut TestHost) {
    enter_all(r, h, &["10 cls", "20 home", "30 put 3", "40 put 4"]);
}

#[test]
fn test_list_ranges() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    numbered(&mut r, &mut h);
    assert_eq!(exec(&mut r, &mut h, "list 20"), "20 home\nReady.\n");
    assert_eq!(exec(&mut r, &mut h, "list 20-30"), "20 home\n30 put 3\nReady.\n");
    assert_eq!(exec(&mut r, &mut h, "list 30-"), "30 put 3\n40 put 4\nReady.\n");
    assert_eq!(exec(&mut r, &mut h, "list -20"), "10 cls\n20 home\nReady.\n");
    assert_eq!(exec(&mut r, &mut h, "list 25"), "Ready.\n");
    assert_eq!(
        exec(&mut r, &mut h, "list 30-20"),
        "Syntax error! (invalid line range)\n"
    );
}

#[test]
fn test_list_stops_when_interrupted() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    numbered(&mut r, &mut h);
    h.interrupt = Some(r.interrupt());
    h.break_after_output = Some(2);
    let out = exec(&mut r, &mut h, "list");
    assert_eq!(out, "10 cls\n20 home\nInterrupted.\n");
    assert!(!out.contains("Ready."));
    assert!(!r.is_error());
}

#[test]
fn test_variable_listing_stops_when_interrupted() {
    let mut r = fixed_runtime();
    let mut h = TestHost::new();
    exec(&mut r, &mut h, "let a = 5");
    exec(&mut r, &mut h, "let b$ = \"hi\"");
    h.interrupt = Some(r.interrupt());
    h.break_after_output = Some(1);
    let out = exec(&mut r, &mut h, "let");
    assert_eq!(out, "a = 5\nInterrupted.\n");
    assert!(!out.contains("Ready."));
}

#[test]
fn test_list_in_program_reports_interrupt_once() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    enter_all(&mut r, &mut h, &["10 list", "20 put 2"]);
    h.interrupt = Some(r.interrupt());
    h.break_after_output = Some(1);
    let out = exec(&mut r, &mut h, "run");
    assert_eq!(out, "10 list\nInterrupted.\nReady.\n");
    assert_eq!(out.matches("Interrupted.").count(), 1);
}

#[test]
fn test_let_lists_variables() {
    let mut r = fixed_runtime();
    let mut h = TestHost::new();
    exec(&mut r, &mut h, "let a = 5");
    exec(&mut r, &mut h, "let b$ = \"hi\"");
    let listing = exec(&mut r, &mut h, "let");
    assert!(listing.starts_with("a = 5\nb$ = \"hi\"\n"));
    assert!(listing.contains("ti = 1234 (builtin)\n"));
    assert!(listing.contains("ti$ = \"13:05:09\" (builtin)\n"));
    assert!(listing.ends_with("Ready.\n"));
    assert_eq!(listing.lines().count(), 6);
}

#[test]
fn test_clear_keeps_builtins_and_program() {
    let mut r = fixed_runtime();
    let mut h = TestHost::new();
    enter_all(&mut r, &mut h, &["let a = 5", "10 put a"]);
    assert_eq!(exec(&mut r, &mut h, "clear"), "");
    assert_eq!(exec(&mut r, &mut h, "put a"), "Variable not found!\n");
    assert_eq!(exec(&mut r, &mut h, "put ti"), "1234");
    assert_eq!(r.listing().len(), 1);
}

#[test]
fn test_new_clears_everything() {
    let mut r = fixed_runtime();
    let mut h = TestHost::new();
    enter_all(&mut r, &mut h, &["let a = 5", "10 put a"]);
    assert_eq!(exec(&mut r, &mut h, "new"), "");
    assert!(r.listing().is_empty());
    assert_eq!(r.var().len(), 3);
    assert_eq!(exec(&mut r, &mut h, "put ti$"), "13:05:09");
}

#[test]
fn test_free() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    assert_eq!(exec(&mut r, &mut h, "free"), "32768 bytes free.\n");
    exec(&mut r, &mut h, "10 put 12");
    let after: usize = exec(&mut r, &mut h, "free")
        .trim_end_matches(" bytes free.\n")
        .parse()
        .unwrap();
    assert!(after < 32768);
}

#[test]
fn test_input() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    h.key("Ada Lovelace");
    assert_eq!(exec(&mut r, &mut h, "input n$"), "");
    assert_eq!(exec(&mut r, &mut h, "put n$"), "Ada Lovelace");
    assert_eq!(
        exec(&mut r, &mut h, "input n"),
        "Syntax error! (string variable expected)\n"
    );
    h.key("12:00:00");
    assert_eq!(exec(&mut r, &mut h, "input ti$"), "Cannot change builtin!\n");
}

#[test]
fn test_cancelled_input_assigns_nothing() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    assert_eq!(exec(&mut r, &mut h, "input n$"), "");
    assert_eq!(exec(&mut r, &mut h, "put n$"), "Variable not found!\n");
}

#[test]
fn test_screen_commands() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    assert_eq!(exec(&mut r, &mut h, "at 5, 2"), "");
    assert_eq!(h.position, (5, 2));
    exec(&mut r, &mut h, "let x = 3");
    exec(&mut r, &mut h, "at x * 2,x");
    assert_eq!(h.position, (6, 3));
    exec(&mut r, &mut h, "home");
    assert_eq!(h.position, (0, 0));
    exec(&mut r, &mut h, "cls");
    assert_eq!(h.cleared, 1);
    assert_eq!(exec(&mut r, &mut h, "at 5"), "Syntax error!\n");
    assert_eq!(
        exec(&mut r, &mut h, "at 300, 1"),
        "Syntax error! (position out of range)\n"
    );
    assert_eq!(
        exec(&mut r, &mut h, "at -1, 1"),
        "Syntax error! (position out of range)\n"
    );
}

#[test]
fn test_switches() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    exec(&mut r, &mut h, "led on");
    assert!(h.led);
    exec(&mut r, &mut h, "LED OFF");
    assert!(!h.led);
    exec(&mut r, &mut h, "cursor off");
    assert!(!h.cursor);
    exec(&mut r, &mut h, "cursor On");
    assert!(h.cursor);
    assert_eq!(exec(&mut r, &mut h, "led dim"), "Syntax error!\n");
    assert_eq!(exec(&mut r, &mut h, "cursor"), "Syntax error!\n");
}

#[test]
fn test_seed_repeats_sequence() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    exec(&mut r, &mut h, "seed 42");
    let first: Vec<String> = (0..3).map(|_| exec(&mut r, &mut h, "put rn")).collect();
    exec(&mut r, &mut h, "seed 40 + 2");
    let again: Vec<String> = (0..3).map(|_| exec(&mut r, &mut h, "put rn")).collect();
    assert_eq!(first, again);
    for n in first {
        let n: i32 = n.parse().unwrap();
        assert!(n >= 0 && n <= 0x7fff);
    }
}

#[test]
fn test_synth_returns_after_quit() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    let out = exec(&mut r, &mut h, "synth");
    assert!(out.starts_with("ESC to quit\n"));
    assert!(h.synth_played);
    assert_eq!(h.cleared, 2);
    assert_eq!(exec(&mut r, &mut h, "put 1"), "1");
}

#[test]
fn test_sleep() {
    let mut r = Runtime::default();
    let mut h = TestHost::new();
    assert_eq!(exec(&mut r, &mut h, "sleep 1"), "");
    assert_eq!(exec(&mut r, &mut h, "sleep -5"), "");
    assert_eq!(exec(&mut r, &mut h, "sleep"), "Invalid number expression!\n");
}
