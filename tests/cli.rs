use std::io::Write;
use std::process::Command; // Run programs
use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions

#[test]
fn test_transcribe() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rna_tools")?;

    cmd.arg("transcribe").arg("CTACGGCAGTCAATTTGCCATC");
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("GAUGCCGUCAGUUAAACGGUAG\n"));

    Ok(())
}

#[test]
fn test_transcribe_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rna_tools")?;

    cmd.arg("transcribe").arg("ACGU");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("InvalidSequence"))
        .stderr(predicate::str::contains("DNA"));

    Ok(())
}

#[test]
fn test_translate() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rna_tools")?;

    cmd.arg("translate").arg("GAUGCCGUCAGUUAAACGGUAGGAAUUAGGGAUGCCGUCAGUUAAACGGUAG");
    let chain = "Methionine, Proline, Serine, Valine, Lysine, Arginine";
    cmd.assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n{}\n", chain, chain)));

    Ok(())
}

#[test]
fn test_translate_formats() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rna_tools")?;
    cmd.arg("translate").arg("--format").arg("one").arg("AUGUUUUAA");
    cmd.assert().success().stdout(predicate::str::diff("MF\n"));

    let mut cmd = Command::cargo_bin("rna_tools")?;
    cmd.arg("translate").arg("-f").arg("three").arg("AUGUUUUAA");
    cmd.assert().success().stdout(predicate::str::diff("Met-Phe\n"));

    Ok(())
}

#[test]
fn test_translate_from_dna() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rna_tools")?;

    // Transcribes to AUGUUUUAA
    cmd.arg("translate").arg("--from-dna").arg("--format").arg("one").arg("TACAAAATT");
    cmd.assert().success().stdout(predicate::str::diff("MF\n"));

    Ok(())
}

#[test]
fn test_translate_no_stop_codon() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rna_tools")?;

    cmd.arg("translate").arg("AUGUUU");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("NoStopCodon"));

    Ok(())
}

#[test]
fn test_translate_no_start_codon() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rna_tools")?;

    cmd.arg("translate").arg("CCCUAA");
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No start codon in CCCUAA"));

    Ok(())
}

#[test]
fn test_codon() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rna_tools")?;

    cmd.arg("codon").arg("AUG").arg("UGA").arg("AGC");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("AUG\tMethionine\tMet\tM"))
        .stdout(predicate::str::contains("UGA\tStop\tTer\t*"))
        .stdout(predicate::str::contains("AGC\tSerine\tSer\tS"));

    Ok(())
}

#[test]
fn test_codon_unrecognized() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rna_tools")?;

    cmd.arg("codon").arg("XYZ").arg("GGG");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("GGG\tGlycine"))
        .stdout(predicate::str::contains("Methionine").not())
        .stderr(predicate::str::contains("unrecognized codon \"XYZ\""));

    Ok(())
}

#[test]
fn test_input_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "ACGT")?;
    writeln!(file)?;
    writeln!(file, "  TTTT  ")?;
    file.flush()?;

    let mut cmd = Command::cargo_bin("rna_tools")?;
    cmd.arg("transcribe").arg("-i").arg(file.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("UGCA\nAAAA\n"));

    Ok(())
}

#[test]
fn test_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::cargo_bin("rna_tools")?;

    cmd.arg("translate").arg("--format").arg("one").write_stdin("AUGUUUUAA\nAUGGGGUGA\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("MF\nMG\n"));

    Ok(())
}

#[test]
fn test_completions() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rna_tools")?;

    cmd.arg("completions").arg("bash");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rna_tools"));

    Ok(())
}

#[test]
fn test_demo() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("central_dogma_demo")?;

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Input: CTACGGCAGTCAATTTGCCATC"))
        .stdout(predicate::str::contains("Output: GAUGCCGUCAGUUAAACGGUAG"))
        .stdout(predicate::str::contains("Chain 0: Methionine (AUG), Proline (CCG)"))
        .stdout(predicate::str::contains("Chain 1: Methionine (AUG)"));

    Ok(())
}
