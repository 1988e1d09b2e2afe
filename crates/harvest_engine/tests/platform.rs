use harvest_engine::parse_build_from_ver;

#[test]
fn extracts_the_build_component_from_ver_output() {
    let text = "\r\nMicrosoft Windows [Version 10.0.19045.3803]\r\n";
    assert_eq!(parse_build_from_ver(text), Some(19045));
}

#[test]
fn handles_output_without_a_revision_component() {
    assert_eq!(
        parse_build_from_ver("Microsoft Windows [Version 10.0.22631]"),
        Some(22631)
    );
}

#[test]
fn rejects_output_without_a_version() {
    assert_eq!(parse_build_from_ver(""), None);
    assert_eq!(parse_build_from_ver("Microsoft Windows"), None);
    assert_eq!(parse_build_from_ver("[Version 10.0]"), None);
    assert_eq!(parse_build_from_ver("[Version abc.def.ghi]"), None);
}
