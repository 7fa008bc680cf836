//! Tests for command-table extraction and merging

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use vsix_descriptor::Document;
use vsix_vsct::{CommandTable, Error};

const VSCT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<CommandTable xmlns="http://schemas.microsoft.com/VisualStudio/2005-10-18/CommandTable">
  <Commands package="guidMyPackage">
    <Buttons>
      <Button guid="guidMyCommandSet" id="Command1Id" priority="0x0100" type="Button" />
    </Buttons>
  </Commands>
  <Symbols>
    <GuidSymbol name="guidMyPackage" value="{C5B71B4F-3713-42A7-9E4C-32D5B2A91E15}" />
    <GuidSymbol name="guidMyCommandSet" value="{1F0FB2F8-11D3-4DD8-A612-0F7B2D9C65F4}">
      <IDSymbol name="MyMenuGroup" value="0x1020" />
      <IDSymbol name="Command1Id" value="0x0100" />
      <IDSymbol name="Command2Id" value="0x0101" />
    </GuidSymbol>
  </Symbols>
</CommandTable>
"#;

#[test]
fn extracts_groups_in_document_order() {
    let doc = Document::parse(VSCT).unwrap();
    let table = CommandTable::extract(&doc).unwrap();

    let names: Vec<_> = table.groups().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["guidMyPackage", "guidMyCommandSet"]);

    let set = &table.groups()[1];
    assert_eq!(set.guid.braced_upper(), "{1F0FB2F8-11D3-4DD8-A612-0F7B2D9C65F4}");
    let ids: Vec<_> = set.ids.iter().map(|s| (s.name.as_str(), s.value)).collect();
    assert_eq!(
        ids,
        [("MyMenuGroup", 0x1020), ("Command1Id", 256), ("Command2Id", 257)]
    );
}

#[test]
fn group_without_ids_is_allowed() {
    let doc = Document::parse(VSCT).unwrap();
    let table = CommandTable::extract(&doc).unwrap();
    assert!(table.groups()[0].ids.is_empty());
}

#[test]
fn duplicate_id_name_within_group_fails() {
    let doc = Document::parse(
        r#"<CommandTable><Symbols>
            <GuidSymbol name="guidSet" value="{C5B71B4F-3713-42A7-9E4C-32D5B2A91E15}">
              <IDSymbol name="CmdId" value="0x0100" />
              <IDSymbol name="CmdId" value="0x0101" />
            </GuidSymbol>
           </Symbols></CommandTable>"#,
    )
    .unwrap();
    let err = CommandTable::extract(&doc).unwrap_err();
    match err {
        Error::DuplicateIdName { group, name } => {
            assert_eq!(group, "guidSet");
            assert_eq!(name, "CmdId");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_guid_fails_extraction() {
    let doc = Document::parse(
        r#"<CommandTable><Symbols>
            <GuidSymbol name="guidSet" value="definitely-not-a-guid" />
           </Symbols></CommandTable>"#,
    )
    .unwrap();
    let err = CommandTable::extract(&doc).unwrap_err();
    assert!(matches!(err, Error::InvalidGuidFormat { .. }));
}

fn write_vsct(dir: &TempDir, file: &str, group: &str) -> std::path::PathBuf {
    let path = dir.path().join(file);
    std::fs::write(
        &path,
        format!(
            r#"<CommandTable><Symbols>
                <GuidSymbol name="{group}" value="{{C5B71B4F-3713-42A7-9E4C-32D5B2A91E15}}">
                  <IDSymbol name="CmdId" value="0x0100" />
                </GuidSymbol>
               </Symbols></CommandTable>"#
        ),
    )
    .unwrap();
    path
}

#[test]
fn merging_disjoint_documents_preserves_order() {
    let dir = TempDir::new().unwrap();
    let a = write_vsct(&dir, "a.vsct", "guidFirst");
    let b = write_vsct(&dir, "b.vsct", "guidSecond");

    let table = CommandTable::extract_all(&[a, b]).unwrap();
    let names: Vec<_> = table.groups().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["guidFirst", "guidSecond"]);
}

#[test]
fn colliding_group_name_across_documents_fails_the_merge() {
    let dir = TempDir::new().unwrap();
    let a = write_vsct(&dir, "a.vsct", "guidSet");
    let b = write_vsct(&dir, "b.vsct", "guidSet");

    let err = CommandTable::extract_all(&[a, b]).unwrap_err();
    match err {
        Error::DuplicateGroupName { name } => assert_eq!(name, "guidSet"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_vsct_file_surfaces_descriptor_error() {
    let dir = TempDir::new().unwrap();
    let err = CommandTable::extract_all(&[dir.path().join("absent.vsct")]).unwrap_err();
    assert!(matches!(
        err,
        Error::Descriptor(vsix_descriptor::Error::FileNotFound { .. })
    ));
}
