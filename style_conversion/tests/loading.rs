//! Loading style files from disk, selecting the parser by extension.
use anyhow::{Result, ensure};
use camino::Utf8Path;
use rstest::rstest;
use style_conversion::StyleError;
use style_conversion::document::{Format, load_document, load_style};
use style_conversion::style::PaintDefaults;
use test_helpers::documents::STYLE_JSON;
use test_helpers::figment::{jail_error, with_jail};

#[rstest]
fn json_files_load_into_styles() -> Result<()> {
    let style = with_jail(|jail| {
        jail.create_file("style.json", STYLE_JSON)?;
        load_style(Utf8Path::new("style.json"), PaintDefaults::Omit).map_err(jail_error)
    })?;
    ensure!(style.layers.len() == 2);
    ensure!(style.sources.len() == 2);
    Ok(())
}

#[cfg(feature = "toml")]
#[rstest]
#[case::toml_extension("style.toml")]
#[case::unknown_extension("style.conf")]
fn toml_is_the_fallback_format(#[case] name: &str) -> Result<()> {
    let style = with_jail(|jail| {
        jail.create_file(name, test_helpers::documents::STYLE_TOML)?;
        load_style(Utf8Path::new(name), PaintDefaults::Omit).map_err(jail_error)
    })?;
    ensure!(Format::from_path(Utf8Path::new(name)) == Format::Toml);
    ensure!(style.name.as_deref() == Some("Transit"));
    Ok(())
}

#[cfg(feature = "yaml")]
#[rstest]
#[case::yaml("style.yaml")]
#[case::yml("style.yml")]
fn yaml_files_load_into_styles(#[case] name: &str) -> Result<()> {
    let style = with_jail(|jail| {
        jail.create_file(name, test_helpers::documents::STYLE_YAML)?;
        load_style(Utf8Path::new(name), PaintDefaults::Omit).map_err(jail_error)
    })?;
    ensure!(style.layers.len() == 2);
    Ok(())
}

#[rstest]
fn malformed_files_report_the_format() -> Result<()> {
    let err = with_jail(|jail| {
        jail.create_file("broken.json", "{\"layers\": [")?;
        Ok(load_document(Utf8Path::new("broken.json")).expect_err("truncated JSON"))
    })?;
    ensure!(matches!(err.as_ref(), StyleError::Parse { format: "JSON", .. }));
    Ok(())
}

#[rstest]
fn conversion_errors_carry_the_member_path() -> Result<()> {
    let err = with_jail(|jail| {
        jail.create_file(
            "style.json",
            r#"{"layers": [{"id": "a", "type": "circle", "source": "s", "paint": {"circle-blur": []}}]}"#,
        )?;
        Ok(load_style(Utf8Path::new("style.json"), PaintDefaults::Omit)
            .expect_err("circle-blur must be a number"))
    })?;
    let StyleError::Conversion(conversion) = err.as_ref() else {
        anyhow::bail!("expected a conversion error, got {err}");
    };
    ensure!(
        conversion.message()
            == "layers: [0]: paint: circle-blur: value must be a number, found an array"
    );
    Ok(())
}
