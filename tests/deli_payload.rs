//! End-to-end checks of the deli-payload binary.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_deli-payload"))
        .args(args)
        .output()
        .expect("failed to run deli-payload")
}

fn write_form(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn recipe_form_defaults_bad_numbers() {
    let dir = TempDir::new().unwrap();
    let form = write_form(
        &dir,
        "recipe.txt",
        "# new recipe\ntitle=Shakshuka\ncategory=vegan_meals\nprep_time=ten\ncook_time=20\nservings=\n",
    );

    let output = run(&["recipe", &form, "--user-id", "7"]);
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["title"], "Shakshuka");
    assert_eq!(body["prep_time"], 0);
    assert_eq!(body["cook_time"], 20);
    assert_eq!(body["servings"], 1);
    assert_eq!(body["user_id"], 7);
}

#[test]
fn feedback_form_sends_null_for_bad_rating() {
    let dir = TempDir::new().unwrap();
    let form = write_form(&dir, "feedback.txt", "recipe_id=3\nrating=great\ncomment=Loved it\n");

    let output = run(&["feedback", &form]);
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["recipe_id"], 3);
    assert!(body["rating"].is_null());
    assert_eq!(body["user_id"], 1);
}

#[test]
fn register_mismatch_fails() {
    let dir = TempDir::new().unwrap();
    let form = write_form(
        &dir,
        "register.txt",
        "username=ada\npassword=one\nconfirm_password=two\n",
    );

    let output = run(&["register", &form]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Passwords do not match"));
}

#[test]
fn missing_form_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");

    let output = run(&["recipe", &missing.to_string_lossy()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error reading form file"));
}

#[test]
fn categories_listed() {
    let output = run(&["categories"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.contains("kids_meals"));
    assert!(stdout.contains("Weight Gain Meals"));
}
