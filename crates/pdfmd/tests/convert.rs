//! End-to-end conversion tests over synthetic lopdf-built documents.

use std::path::PathBuf;

use lopdf::{Object, Stream, dictionary};
use tempfile::TempDir;

use pdfmd::{ConvertError, ConvertOptions, Converter, NoTables, TableBlock, TableSource};

/// Build a single-page PDF with the given content stream and fonts.
fn pdf_with_content(content: &[u8], fonts: &[(&str, &str)]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let mut font_resources = lopdf::Dictionary::new();
    for (name, base) in fonts {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => *base,
        });
        font_resources.set(name.as_bytes().to_vec(), Object::Reference(font_id));
    }

    let content_id = doc.add_object(Stream::new(dictionary! {}, content.to_vec()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(612),
            Object::Integer(792),
        ],
        "Contents" => Object::Reference(content_id),
        "Resources" => dictionary! { "Font" => Object::Dictionary(font_resources) },
    });

    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => vec![Object::Reference(page_id)],
        "Count" => Object::Integer(1),
    });
    if let Ok(page) = doc.get_object_mut(page_id) {
        if let Ok(dict) = page.as_dict_mut() {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// Write PDF bytes to `<dir>/<name>` and return the path.
fn write_pdf(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_missing_input_rejected_before_processing() {
    let result = Converter::new("/nonexistent/file.pdf", None);
    assert!(matches!(
        result,
        Err(ConvertError::InputNotFound { .. })
    ));
}

#[test]
fn test_wrong_extension_rejected_before_processing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();
    let result = Converter::new(&path, None);
    assert!(matches!(result, Err(ConvertError::WrongFormat { .. })));
}

#[test]
fn test_uppercase_extension_accepted() {
    let dir = TempDir::new().unwrap();
    let bytes = pdf_with_content(b"", &[("F1", "Helvetica")]);
    let path = write_pdf(&dir, "DOC.PDF", &bytes);
    assert!(Converter::new(&path, None).is_ok());
}

#[test]
fn test_output_path_defaults_to_md_extension() {
    let dir = TempDir::new().unwrap();
    let bytes = pdf_with_content(b"", &[("F1", "Helvetica")]);
    let path = write_pdf(&dir, "report.pdf", &bytes);
    let converter = Converter::new(&path, None).unwrap();
    assert_eq!(converter.output_path(), dir.path().join("report.md"));
}

#[test]
fn test_explicit_output_path_used() {
    let dir = TempDir::new().unwrap();
    let bytes = pdf_with_content(b"", &[("F1", "Helvetica")]);
    let path = write_pdf(&dir, "report.pdf", &bytes);
    let out = dir.path().join("elsewhere.md");
    let converter = Converter::new(&path, Some(out.clone())).unwrap();
    assert_eq!(converter.output_path(), out);
}

#[test]
fn test_empty_document_converts_to_empty_markdown() {
    // Zero extractable glyphs is not an error (scanned/image-only pages).
    let dir = TempDir::new().unwrap();
    let bytes = pdf_with_content(b"", &[("F1", "Helvetica")]);
    let path = write_pdf(&dir, "scan.pdf", &bytes);
    let output = Converter::new(&path, None).unwrap().convert().unwrap();
    assert_eq!(std::fs::read_to_string(output).unwrap(), "");
}

#[test]
fn test_large_line_becomes_heading_over_body() {
    // 24pt title over enough 12pt body for 12 to win the frequency vote:
    // relative position 1.0 in the size range, so level 1.
    let content = b"BT /F1 24 Tf 72 720 Td (Title) Tj \
                    /F1 12 Tf 0 -40 Td (Body text for the page) Tj ET"
        .to_vec();
    let bytes = pdf_with_content(&content, &[("F1", "Helvetica")]);
    let dir = TempDir::new().unwrap();
    let path = write_pdf(&dir, "doc.pdf", &bytes);

    let markdown = Converter::new(&path, None).unwrap().convert_to_string().unwrap();
    assert!(markdown.contains("# Title"), "got: {markdown}");
    assert!(markdown.contains("Body text for the page"), "got: {markdown}");
}

#[test]
fn test_uniform_size_document_has_no_headings() {
    let content = b"BT /F1 12 Tf 72 720 Td (First line here) Tj \
                    0 -20 Td (Second line here) Tj ET"
        .to_vec();
    let bytes = pdf_with_content(&content, &[("F1", "Helvetica")]);
    let dir = TempDir::new().unwrap();
    let path = write_pdf(&dir, "doc.pdf", &bytes);

    let markdown = Converter::new(&path, None).unwrap().convert_to_string().unwrap();
    assert!(!markdown.contains('#'), "got: {markdown}");
}

#[test]
fn test_ordered_list_indices_preserved_verbatim() {
    let content = b"BT /F1 12 Tf 72 720 Td (3. Third) Tj \
                    0 -20 Td (1. First) Tj ET"
        .to_vec();
    let bytes = pdf_with_content(&content, &[("F1", "Helvetica")]);
    let dir = TempDir::new().unwrap();
    let path = write_pdf(&dir, "doc.pdf", &bytes);

    let markdown = Converter::new(&path, None).unwrap().convert_to_string().unwrap();
    let lines: Vec<&str> = markdown.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines, vec!["3. Third", "1. First"]);
}

#[test]
fn test_bullet_lines_become_list_items() {
    let content = b"BT /F1 12 Tf 72 720 Td (- first item) Tj \
                    0 -20 Td (- second item) Tj ET"
        .to_vec();
    let bytes = pdf_with_content(&content, &[("F1", "Helvetica")]);
    let dir = TempDir::new().unwrap();
    let path = write_pdf(&dir, "doc.pdf", &bytes);

    let markdown = Converter::new(&path, None).unwrap().convert_to_string().unwrap();
    assert!(markdown.contains("- first item"), "got: {markdown}");
    assert!(markdown.contains("- second item"), "got: {markdown}");
}

#[test]
fn test_bold_line_wrapped_in_emphasis() {
    // The bold line shares the body size, so it cannot be a heading; the
    // emphasis inferrer wraps it instead.
    let content = b"BT /F2 12 Tf 72 720 Td (Important notice) Tj \
                    /F1 12 Tf 0 -40 Td (Plain body text here) Tj ET"
        .to_vec();
    let bytes = pdf_with_content(&content, &[("F1", "Helvetica"), ("F2", "Helvetica-Bold")]);
    let dir = TempDir::new().unwrap();
    let path = write_pdf(&dir, "doc.pdf", &bytes);

    let markdown = Converter::new(&path, None).unwrap().convert_to_string().unwrap();
    assert!(markdown.contains("**Important notice**"), "got: {markdown}");
    assert!(markdown.contains("Plain body text here"), "got: {markdown}");
}

#[test]
fn test_emphasis_can_be_disabled() {
    let content = b"BT /F2 12 Tf 72 720 Td (Important notice) Tj \
                    /F1 12 Tf 0 -40 Td (Plain body text here) Tj ET"
        .to_vec();
    let bytes = pdf_with_content(&content, &[("F1", "Helvetica"), ("F2", "Helvetica-Bold")]);
    let dir = TempDir::new().unwrap();
    let path = write_pdf(&dir, "doc.pdf", &bytes);

    let options = ConvertOptions {
        detect_emphasis: false,
        ..ConvertOptions::default()
    };
    let markdown = Converter::new(&path, None)
        .unwrap()
        .with_options(options)
        .convert_to_string()
        .unwrap();
    assert!(markdown.contains("Important notice"), "got: {markdown}");
    assert!(!markdown.contains("**"), "got: {markdown}");
}

/// A table source that reports one fixed table on page 0.
struct OneTable(TableBlock);

impl TableSource for OneTable {
    fn page_tables(&self, index: usize) -> Result<Vec<TableBlock>, pdfmd::ExtractError> {
        Ok(if index == 0 { vec![self.0.clone()] } else { Vec::new() })
    }
}

#[test]
fn test_external_table_source_rendered_and_region_excluded() {
    // Glyphs at top=72 ("In the table") fall inside the detector's bbox
    // and must not re-appear as flowing text.
    let content = b"BT /F1 12 Tf 72 720 Td (In the table) Tj \
                    0 -300 Td (Flowing text) Tj ET"
        .to_vec();
    let bytes = pdf_with_content(&content, &[("F1", "Helvetica")]);

    let table = TableBlock {
        bbox: pdfmd::BBox::new(0.0, 50.0, 612.0, 100.0),
        rows: vec![
            vec!["Name".to_string(), "Age".to_string()],
            vec!["Alice".to_string(), "30".to_string(), "extra".to_string()],
        ],
    };

    let source = pdfmd::LopdfSource::open(&bytes).unwrap();
    let markdown =
        pdfmd::convert_source(&source, &OneTable(table), &ConvertOptions::default()).unwrap();

    assert!(markdown.contains("| Name | Age |"), "got: {markdown}");
    assert!(markdown.contains("| --- | --- |"), "got: {markdown}");
    assert!(markdown.contains("| Alice | 30 | extra |"), "got: {markdown}");
    assert!(!markdown.contains("In the table"), "got: {markdown}");
    assert!(markdown.contains("Flowing text"), "got: {markdown}");
}

#[test]
fn test_no_tables_source_is_default() {
    let bytes = pdf_with_content(b"", &[("F1", "Helvetica")]);
    let source = pdfmd::LopdfSource::open(&bytes).unwrap();
    let markdown = pdfmd::convert_source(&source, &NoTables, &ConvertOptions::default()).unwrap();
    assert_eq!(markdown, "");
}
