use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const SYNSETS: &str = "\
0,entity,that which is perceived or known or inferred
1,organism being,a living thing that has the ability to act
2,animal beast,a living organism characterized by voluntary movement
3,plant flora,a living organism lacking the power of locomotion
4,cat true_cat,feline mammal usually having thick soft fur
5,dog domestic_dog,a member of the genus Canis
6,tree,a tall perennial woody plant
7,message content,what a communication is about
";

const HYPERNYMS: &str = "\
1,0
2,1
3,1
4,2
5,2
6,3
7,0
";

const DIGRAPH: &str = "5\n4\n1 0\n2 0\n3 1\n4 2\n";

fn write_fixtures(dir: &TempDir) {
    std::fs::write(dir.path().join("synsets.txt"), SYNSETS).unwrap();
    std::fs::write(dir.path().join("hypernyms.txt"), HYPERNYMS).unwrap();
    std::fs::write(dir.path().join("digraph.txt"), DIGRAPH).unwrap();
}

fn wordnet(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wordnet"))
        .args(args)
        .current_dir(dir)
        .env_remove("WORDNET_SYNSETS")
        .env_remove("WORDNET_HYPERNYMS")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // The child may exit before reading stdin; a broken pipe here is fine.
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn sca_reads_pairs_from_stdin() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let out = wordnet(dir.path(), &["sca", "--digraph", "digraph.txt"], "3 4\n3 1\n");
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "length = 4, ancestor = 0\nlength = 1, ancestor = 1\n"
    );
}

#[test]
fn sca_reports_bad_pair_and_continues() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let out = wordnet(dir.path(), &["sca", "--digraph", "digraph.txt"], "9 0\n3 4\n");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "length = 4, ancestor = 0\n");
    assert!(String::from_utf8_lossy(&out.stderr).contains("out of range"));
}

#[test]
fn sca_json_output() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let out = wordnet(
        dir.path(),
        &["--format", "json", "sca", "--digraph", "digraph.txt"],
        "3 4\n",
    );
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_str(stdout(&out).trim()).unwrap();
    assert_eq!(json["ancestor"], 0);
    assert_eq!(json["length"], 4);
}

#[test]
fn lookup_prints_summary() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let out = wordnet(
        dir.path(),
        &[
            "lookup",
            "--synsets",
            "synsets.txt",
            "--hypernyms",
            "hypernyms.txt",
            "cat",
            "tree",
        ],
        "",
    );
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("sca(cat, tree) = organism being"));
    assert!(text.contains("distance(cat, tree) = 4"));
}

#[test]
fn lexicon_paths_from_environment() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let out = Command::new(env!("CARGO_BIN_EXE_wordnet"))
        .args(["outcast", "cat", "dog", "message"])
        .current_dir(dir.path())
        .env("WORDNET_SYNSETS", "synsets.txt")
        .env("WORDNET_HYPERNYMS", "hypernyms.txt")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(stdout(&out), "cat dog *message*\n");
}

#[test]
fn outcast_reads_nouns_from_stdin() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let out = wordnet(
        dir.path(),
        &[
            "outcast",
            "--synsets",
            "synsets.txt",
            "--hypernyms",
            "hypernyms.txt",
        ],
        "tree cat\ndog\n",
    );
    assert!(out.status.success());
    assert_eq!(stdout(&out), "*tree* cat dog\n");
}

#[test]
fn missing_lexicon_setting_fails() {
    let dir = TempDir::new().unwrap();
    let out = wordnet(dir.path(), &["lookup", "cat", "dog"], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("WORDNET_SYNSETS"));
}

#[test]
fn unreadable_digraph_exits_3() {
    let dir = TempDir::new().unwrap();
    let out = wordnet(dir.path(), &["sca", "--digraph", "missing.txt"], "");
    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn absurd_digraph_header_exits_3() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("huge.txt"), "2 18446744073709551615\n").unwrap();
    let out = wordnet(dir.path(), &["sca", "--digraph", "huge.txt"], "0 1\n");
    assert_eq!(out.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("huge.txt:1"));
    assert!(!stderr.contains("panicked"));
}
