use crate::common::Workspace;

fn sample() -> Workspace {
    let ws = Workspace::new();
    ws.write("file.txt", "one two\nthree\n");
    ws
}

#[test]
fn long_and_short_forms_agree() {
    let ws = sample();
    let pairs = [
        ("--lines", "-l", " 2 file.txt\n"),
        ("--words", "-w", " 3 file.txt\n"),
        ("--chars", "-m", " 14 file.txt\n"),
        ("--bytes", "-c", " 14 file.txt\n"),
        ("--max-line-length", "-L", " 7 file.txt\n"),
    ];
    for (long, short, expected) in pairs {
        ws.cmd().args([long, "file.txt"]).assert().success().stdout(expected);
        ws.cmd().args([short, "file.txt"]).assert().success().stdout(expected);
    }
}

#[test]
fn clustered_short_options() {
    let ws = sample();
    ws.cmd()
        .args(["-lw", "file.txt"])
        .assert()
        .success()
        .stdout(" 2 3 file.txt\n");
    ws.cmd()
        .args(["-l", "-w", "file.txt"])
        .assert()
        .success()
        .stdout(" 2 3 file.txt\n");
}

#[test]
fn duplicates_collapse() {
    let ws = sample();
    ws.cmd()
        .args(["-l", "-l", "-l", "file.txt"])
        .assert()
        .success()
        .stdout(" 2 file.txt\n");
    ws.cmd()
        .args(["-ll", "--lines", "file.txt"])
        .assert()
        .success()
        .stdout(" 2 file.txt\n");
}

#[test]
fn unterminated_line_is_not_counted() {
    let ws = Workspace::new();
    ws.write("abc.txt", "abc");
    ws.cmd()
        .args(["-l", "abc.txt"])
        .assert()
        .success()
        .stdout(" 0 abc.txt\n");
}

#[test]
fn blank_files_have_no_words() {
    let ws = Workspace::new();
    ws.write("empty.txt", "").write("blank.txt", " \t\n\n  ");
    for name in ["empty.txt", "blank.txt"] {
        ws.cmd()
            .args(["-w", name])
            .assert()
            .success()
            .stdout(format!(" 0 {name}\n"));
    }
}

#[test]
fn carriage_returns_end_lines() {
    let ws = Workspace::new();
    ws.write("crlf.txt", "ab\r\ncd\r");
    ws.cmd()
        .args(["-l", "-m", "-c", "-L", "crlf.txt"])
        .assert()
        .success()
        .stdout(" 2 6 7 2 crlf.txt\n");
}
