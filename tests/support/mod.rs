//! Shared fixtures for integration tests: throwaway award directories.
//!
//! Each fixture writes records shaped like the real award export
//! (`rootTag` → `Award` → fields) into a `TempDir` that must be kept alive
//! for the paths to remain valid.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Abstract of the kelp synchrony award, trimmed, with the export's
/// line-break markup and a trailing boilerplate sentence.
pub const KELP_ABSTRACT: &str = "Populations of organisms located in different places can change \
over time in similar ways. This project studies coastal kelp forests and sandy beach \
ecosystems.&amp;lt;br/&amp;gt;&amp;lt;br/&amp;gt;The objective is to investigate synchrony \
in giant kelp (Macrocystis pyrifera) forests, see https://kelp.example.org/data.";

/// Builder for a single award record.
#[derive(Debug, Default, Clone)]
pub struct AwardFixture {
    pub award_id: Option<String>,
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub null_abstract: bool,
    pub directorate: Option<String>,
    pub programs: Vec<String>,
}

impl AwardFixture {
    pub fn new(award_id: &str) -> Self {
        Self {
            award_id: Some(award_id.to_string()),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Abstract text, already XML-escaped.
    pub fn abstract_text(mut self, text: &str) -> Self {
        self.abstract_text = Some(text.to_string());
        self
    }

    pub fn null_abstract(mut self) -> Self {
        self.null_abstract = true;
        self
    }

    pub fn directorate(mut self, long_name: &str) -> Self {
        self.directorate = Some(long_name.to_string());
        self
    }

    pub fn program(mut self, text: &str) -> Self {
        self.programs.push(text.to_string());
        self
    }

    /// Renders the record as the export writes it.
    pub fn to_xml(&self) -> String {
        let mut body = String::new();
        if let Some(title) = &self.title {
            body.push_str(&format!("<AwardTitle>{title}</AwardTitle>"));
        }
        body.push_str("<AGENCY>NSF</AGENCY>");
        if let Some(directorate) = &self.directorate {
            body.push_str(&format!(
                "<Organization><Code>06040300</Code><Directorate>\
                 <Abbreviation>XX</Abbreviation><LongName>{directorate}</LongName>\
                 </Directorate></Organization>"
            ));
        }
        if let Some(text) = &self.abstract_text {
            body.push_str(&format!("<AbstractNarration>{text}</AbstractNarration>"));
        } else if self.null_abstract {
            body.push_str("<AbstractNarration/>");
        }
        if let Some(award_id) = &self.award_id {
            body.push_str(&format!("<AwardID>{award_id}</AwardID>"));
        }
        for (code, program) in self.programs.iter().enumerate() {
            body.push_str(&format!(
                "<ProgramElement><Code>{}</Code><Text>{program}</Text></ProgramElement>",
                1650 + code
            ));
        }
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rootTag>\n<Award>{body}</Award>\n</rootTag>\n"
        )
    }

    pub fn write(&self, dir: &Path, file_name: &str) {
        fs::write(dir.join(file_name), self.to_xml()).expect("Failed to write award fixture");
    }
}

/// Writes raw content to `dir/file_name`.
pub fn write_raw(dir: &Path, file_name: &str, content: &str) {
    fs::write(dir.join(file_name), content).expect("Failed to write fixture file");
}

/// A directory with 4 usable records and 4 that must be excluded.
///
/// Retained (sorted): `2023523.xml`, `2023524.xml`, `2023526.xml`, `2023530.xml`.
pub fn mixed_corpus() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();

    AwardFixture::new("2023523")
        .title("Synchrony in giant kelp populations")
        .abstract_text(KELP_ABSTRACT)
        .directorate("Directorate For Geosciences")
        .program("BIOLOGICAL OCEANOGRAPHY")
        .write(dir, "2023523.xml");
    AwardFixture::new("2023524")
        .title("COVID-19 transmission models")
        .abstract_text("State-of-the-art COVID-19 transmission models for coastal communities.")
        .directorate("Directorate For Mathematical &amp; Physical Sciences")
        .program("MATHEMATICAL BIOLOGY")
        .program("COVID-19 RESEARCH")
        .write(dir, "2023524.xml");
    AwardFixture::new("2023526")
        .title("Kelp forest genomics")
        .abstract_text("Kelp genomics reveals forest resilience.")
        .directorate("Directorate For Geosciences")
        .write(dir, "2023526.xml");
    AwardFixture::new("2023530")
        .abstract_text("Marine larvae dispersal across kelp forests.")
        .program("BIOLOGICAL OCEANOGRAPHY")
        .write(dir, "2023530.xml");

    // Excluded: null abstract, missing abstract, malformed XML, wrong root.
    AwardFixture::new("2023525")
        .title("No abstract yet")
        .null_abstract()
        .write(dir, "2023525.xml");
    AwardFixture::new("2023527").title("Abstract field missing").write(dir, "2023527.xml");
    write_raw(dir, "2023528.xml", "<rootTag><Award><AbstractNarration>cut");
    write_raw(dir, "2023529.xml", "<books><book>Not an award</book></books>");

    // Ignored: wrong extension.
    write_raw(dir, "README.txt", "Award export, fiscal year 2020");
    AwardFixture::new("2023531")
        .abstract_text("Backup copy.")
        .write(dir, "2023531.xml.bak");

    temp_dir
}
