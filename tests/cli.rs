use std::error::Error;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

fn columnar_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_columnar"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(columnar_command().args(args).output()?)
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Result<Output, Box<dyn Error>> {
    let mut child = columnar_command()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .ok_or("stdin not captured")?
        .write_all(stdin.as_bytes())?;
    Ok(child.wait_with_output()?)
}

#[test]
fn cli_end_to_end_flow() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let plain = dir.path().join("plain.txt");
    let cipher = dir.path().join("cipher.txt");
    let recovered = dir.path().join("recovered.txt");

    fs::write(&plain, "Meet at the usual place at noon\n")?;

    let encrypt = run(&[
        "encrypt",
        "--rows",
        "4",
        "--cols",
        "3",
        plain.to_str().unwrap(),
        "-o",
        cipher.to_str().unwrap(),
    ])?;
    assert!(
        encrypt.status.success(),
        "encrypt command failed: {}",
        String::from_utf8_lossy(&encrypt.stderr)
    );

    let ciphertext = fs::read_to_string(&cipher)?;
    assert_eq!(ciphertext.chars().count() % 12, 0);
    assert_ne!(ciphertext, "Meet at the usual place at noon\n");

    let decrypt = run(&[
        "decrypt",
        "--shape",
        "4x3",
        cipher.to_str().unwrap(),
        "-o",
        recovered.to_str().unwrap(),
    ])?;
    assert!(
        decrypt.status.success(),
        "decrypt command failed: {}",
        String::from_utf8_lossy(&decrypt.stderr)
    );

    assert_eq!(
        fs::read_to_string(&recovered)?,
        "Meet at the usual place at noon\n"
    );

    Ok(())
}

#[test]
fn output_file_ciphertext_ending_in_newline_roundtrips() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let cipher = dir.path().join("cipher.txt");

    let encrypt = run(&[
        "encrypt",
        "--shape",
        "1x3",
        "--text",
        "hi\n",
        "-o",
        cipher.to_str().unwrap(),
    ])?;
    assert!(encrypt.status.success());
    assert_eq!(fs::read_to_string(&cipher)?, "hi\n");

    let decrypt = run(&["decrypt", "--shape", "1x3", cipher.to_str().unwrap()])?;
    assert!(decrypt.status.success());
    let stderr = String::from_utf8(decrypt.stderr)?;
    assert!(!stderr.contains("warning"), "unexpected stderr: {}", stderr);
    assert_eq!(String::from_utf8(decrypt.stdout)?, "hi\n\n");
    Ok(())
}

#[test]
fn encrypt_inline_text_to_stdout() -> Result<(), Box<dyn Error>> {
    let output = run(&["encrypt", "-r", "2", "-c", "3", "--text", "HELLO"])?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "HLEOLA\n");
    Ok(())
}

#[test]
fn decrypt_from_stdin() -> Result<(), Box<dyn Error>> {
    let output = run_with_stdin(&["d", "--shape", "2x3"], "HLEOLA\n")?;
    assert!(
        output.status.success(),
        "decrypt failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8(output.stdout)?, "HELLO\n");
    Ok(())
}

#[test]
fn verbose_reports_blocks_on_stderr() -> Result<(), Box<dyn Error>> {
    let output = run(&["encrypt", "--shape", "2x3", "--text", "HELLO WORLD", "-v"])?;
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("2 blocks"), "unexpected stderr: {}", stderr);
    assert!(stderr.contains("1 filler added"), "unexpected stderr: {}", stderr);
    Ok(())
}

#[test]
fn decrypt_warns_on_misaligned_input() -> Result<(), Box<dyn Error>> {
    let output = run(&["decrypt", "--shape", "2x3", "--text", "HLEOLAHLEO"])?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "HELLOAHEALO\n");
    assert!(String::from_utf8(output.stderr)?.contains("warning"));
    Ok(())
}

#[test]
fn zero_rows_is_rejected() -> Result<(), Box<dyn Error>> {
    let output = run(&["encrypt", "--rows", "0", "--cols", "3", "--text", "HELLO"])?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Invalid argument"), "unexpected stderr: {}", stderr);
    Ok(())
}

#[test]
fn oversized_grid_is_rejected() -> Result<(), Box<dyn Error>> {
    let output = run(&[
        "encrypt",
        "--rows",
        "4611686018427387904",
        "--cols",
        "1",
        "--text",
        "HI",
    ])?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error: Invalid argument"), "unexpected stderr: {}", stderr);
    Ok(())
}

#[test]
fn missing_shape_is_a_usage_error() -> Result<(), Box<dyn Error>> {
    let output = run(&["encrypt", "--text", "HELLO"])?;
    assert_eq!(output.status.code(), Some(2));

    let output = run(&["encrypt", "--rows", "2", "--text", "HELLO"])?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn bad_shape_is_a_usage_error() -> Result<(), Box<dyn Error>> {
    let output = run(&["encrypt", "--shape", "two-by-three", "--text", "HELLO"])?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn info_reports_layout() -> Result<(), Box<dyn Error>> {
    let output = run(&["info", "--shape", "2x3", "--text", "HELLO"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Shape: 2x3"));
    assert!(stdout.contains("Blocks: 1"));
    assert!(stdout.contains("Filler added: 1"));
    Ok(())
}

#[test]
fn info_json_output() -> Result<(), Box<dyn Error>> {
    let output = run(&["info", "-r", "3", "-c", "3", "--text", "HELLO WORLD", "--json"])?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["capacity"], 9);
    assert_eq!(value["blocks"], 2);
    assert_eq!(value["padded_len"], 18);
    Ok(())
}

#[test]
fn version_flag_prints_build_information() -> Result<(), Box<dyn Error>> {
    let output = run(&["--version"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("columnar "), "unexpected version line: {}", stdout);
    Ok(())
}

#[test]
fn running_without_subcommand_displays_help() -> Result<(), Box<dyn Error>> {
    let output = run(&[])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Usage"), "help output missing usage: {}", stdout);
    Ok(())
}
