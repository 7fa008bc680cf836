//! End-to-end pipeline tests across the workspace crates
//!
//! Covers the whole flow: descriptor files -> extractors -> emitter, and
//! source manifest + discovery flags -> injector -> derived manifest.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use vsix_codegen::emit;
use vsix_descriptor::Document;
use vsix_inject::{InjectRequest, inject};
use vsix_manifest::ManifestMetadata;
use vsix_vsct::{CommandTable, Error as VsctError};

const MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<PackageManifest Version="2.0.0" xmlns="http://schemas.microsoft.com/developer/vsx-schema/2011">
  <Metadata>
    <Identity Id="Contoso.Sample.91d3f1a2" Version="2.4.0" Language="en-US" Publisher="Contoso" />
    <DisplayName>Sample Extension</DisplayName>
    <Description xml:space="preserve">Scaffolds &quot;smart&quot; projects under C:\Dev</Description>
    <Tags>templates;productivity</Tags>
  </Metadata>
  <Installation>
    <InstallationTarget Id="Microsoft.VisualStudio.Community" Version="[17.0,18.0)" />
  </Installation>
  <Assets>
    <Asset Type="Microsoft.VisualStudio.VsPackage" Path="Sample.pkgdef" />
  </Assets>
</PackageManifest>
"#;

const VSCT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<CommandTable xmlns="http://schemas.microsoft.com/VisualStudio/2005-10-18/CommandTable">
  <Symbols>
    <GuidSymbol name="guidSamplePackage" value="{D4E8F2A1-6C3B-4F5E-9A7D-1B2C3D4E5F60}" />
    <GuidSymbol name="guidSampleCommandSet" value="{A1B2C3D4-E5F6-4A5B-8C7D-9E0F1A2B3C4D}">
      <IDSymbol name="SampleMenuGroup" value="0x1020" />
      <IDSymbol name="Command1Id" value="0x0100" />
      <IDSymbol name="Command2Id" value="0x0101" />
    </GuidSymbol>
  </Symbols>
</CommandTable>
"#;

#[test]
fn descriptors_to_constant_artifact() {
    let dir = TempDir::new().unwrap();
    let manifest_path = dir.path().join("source.extension.vsixmanifest");
    let vsct_path = dir.path().join("commands.vsct");
    fs::write(&manifest_path, MANIFEST).unwrap();
    fs::write(&vsct_path, VSCT).unwrap();

    let doc = Document::load(&manifest_path).unwrap();
    let metadata = ManifestMetadata::extract(&doc).unwrap();
    let table = CommandTable::extract_all(&[vsct_path]).unwrap();
    let artifact = emit(&metadata, &table).unwrap();

    assert!(artifact.contains(r#"pub const ID: &str = "Contoso.Sample.91d3f1a2";"#));
    assert!(artifact.contains(
        r#"pub const DESCRIPTION: &str = "Scaffolds \"smart\" projects under C:\\Dev";"#
    ));
    assert!(artifact.contains("pub const COMMAND1_ID: u32 = 256;"));
    assert!(artifact.contains("pub const COMMAND2_ID: u32 = 257;"));
    assert!(artifact.contains(
        r#"pub const GUID_STRING: &str = "{A1B2C3D4-E5F6-4A5B-8C7D-9E0F1A2B3C4D}";"#
    ));
}

#[test]
fn emission_is_reproducible_across_reparses() {
    let doc_a = Document::parse(MANIFEST).unwrap();
    let doc_b = Document::parse(MANIFEST).unwrap();
    let vsct_a = Document::parse(VSCT).unwrap();
    let vsct_b = Document::parse(VSCT).unwrap();

    let first = emit(
        &ManifestMetadata::extract(&doc_a).unwrap(),
        &CommandTable::extract(&vsct_a).unwrap(),
    )
    .unwrap();
    let second = emit(
        &ManifestMetadata::extract(&doc_b).unwrap(),
        &CommandTable::extract(&vsct_b).unwrap(),
    )
    .unwrap();

    assert_eq!(first, second);
}

#[test]
fn merge_conflict_blocks_artifact_emission() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.vsct");
    let b = dir.path().join("b.vsct");
    let conflicting = VSCT.replace("guidSamplePackage", "guidSet")
        .replace("guidSampleCommandSet", "guidOther");
    fs::write(&a, &conflicting).unwrap();
    fs::write(&b, conflicting.replace("guidOther", "guidAnother")).unwrap();

    let err = CommandTable::extract_all(&[a, b]).unwrap_err();
    match err {
        VsctError::DuplicateGroupName { name } => assert_eq!(name, "guidSet"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn inject_then_codegen_sees_injected_manifest() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("source.extension.vsixmanifest");
    fs::write(&source, MANIFEST).unwrap();

    let mut request = InjectRequest::new(&source, dir.path().join("obj").join("extension.vsixmanifest"));
    request.has_project_templates = true;
    request.has_item_templates = true;
    let outcome = inject(&request);
    assert!(outcome.success);

    // The derived manifest still extracts cleanly with identical metadata.
    let derived = Document::load(&request.destination).unwrap();
    let metadata = ManifestMetadata::extract(&derived).unwrap();
    assert_eq!(metadata.identifier, "Contoso.Sample.91d3f1a2");
    assert_eq!(
        metadata.description,
        r#"Scaffolds "smart" projects under C:\Dev"#
    );
}

#[test]
fn repeated_injection_converges_after_first_run() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("source.extension.vsixmanifest");
    fs::write(&source, MANIFEST).unwrap();

    let mut request = InjectRequest::new(&source, dir.path().join("pass1.vsixmanifest"));
    request.has_project_templates = true;
    assert!(inject(&request).success);
    let pass1 = fs::read_to_string(&request.destination).unwrap();

    // Chain three more passes, each consuming the previous output.
    let mut previous = request.destination.clone();
    for pass in 2..=4 {
        let mut next = InjectRequest::new(&previous, dir.path().join(format!("pass{pass}.vsixmanifest")));
        next.has_project_templates = true;
        assert!(inject(&next).success);
        assert_eq!(fs::read_to_string(&next.destination).unwrap(), pass1);
        previous = next.destination;
    }
}
