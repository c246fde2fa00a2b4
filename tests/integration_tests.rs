//! Integration tests for the resume ATS checker

use resume_ats::config::OutputFormat;
use resume_ats::input::{FileType, InputManager};
use resume_ats::output::ReportGenerator;
use resume_ats::processing::{AtsScorer, Rating};
use resume_ats::session::{AnalysisSession, SessionState};
use resume_ats::ResumeAtsError;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| {
            format!(
                r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                escape(p)
            )
        })
        .collect();
    let xml = format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#
        ),
        "http://schemas.openxmlformats.org/wordprocessingml/2006/main",
        body
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer.start_file("word/document.xml", SimpleFileOptions::default()).unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

/// Minimal uncompressed PDF with one Helvetica text line per entry, one page per slice
fn pdf_bytes(pages: &[&[&str]]) -> Vec<u8> {
    let font_id = 3;
    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        String::new(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut kids = Vec::new();
    for lines in pages {
        let content: String = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let escaped = line.replace('\\', "\\\\").replace('(', "\\(").replace(')', "\\)");
                format!("BT /F1 12 Tf 72 {} Td ({}) Tj ET\n", 720 - 16 * i, escaped)
            })
            .collect();

        let page_id = objects.len() + 1;
        kids.push(format!("{} 0 R", page_id));
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 {} 0 R >> >> /Contents {} 0 R >>",
            font_id,
            page_id + 1
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ));
    }
    objects[1] = format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), pages.len());

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::new();
    for (i, object) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, object));
    }

    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        pdf.push_str(&format!("{:010} 00000 n \n", offset));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));
    pdf.into_bytes()
}

fn write_fixture(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

fn strong_resume() -> Vec<String> {
    let mut paragraphs: Vec<String> = vec![
        "Jane Doe".into(),
        "Email: jane@example.com | Phone: 555-123-4567".into(),
        "Professional Summary".into(),
        "Experience".into(),
        "• Managed a team of 8 engineers and mentored new hires".into(),
        "• Developed and launched a billing app that increased revenue 20%".into(),
        "• Led the migration that reduced costs by 30%".into(),
        "• Designed, implemented and improved the deploy pipeline".into(),
        "• Trained staff, analyzed incidents and coordinated releases".into(),
        "• Achieved 99.9% uptime".into(),
        "• Created internal tooling".into(),
        "Education".into(),
        "B.Sc. Computer Science".into(),
        "Skills".into(),
        "Rust, Go, SQL".into(),
    ];
    paragraphs.push(vec!["lorem"; 300].join(" "));
    paragraphs
}

#[tokio::test]
async fn test_docx_extraction_preserves_paragraphs() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "resume.docx", &docx_bytes(&["Jane Doe", "Skills & Tools"]));

    let text = InputManager::new().extract_text(&path).await.unwrap();
    assert_eq!(text.as_str(), "Jane Doe\n\nSkills & Tools\n\n");
}

#[tokio::test]
async fn test_strong_docx_resume_scores_full_marks() {
    let dir = TempDir::new().unwrap();
    let paragraphs = strong_resume();
    let refs: Vec<&str> = paragraphs.iter().map(String::as_str).collect();
    let path = write_fixture(&dir, "Jane_Doe.DOCX", &docx_bytes(&refs));

    let text = InputManager::new().extract_text(&path).await.unwrap();
    let result = AtsScorer::new().unwrap().analyze(&text);

    assert_eq!(result.section_count, 5);
    assert_eq!(result.breakdown.length_score, 20);
    assert_eq!(result.breakdown.format_score, 20);
    assert_eq!(result.keyword_count, 10);
    assert_eq!(result.verb_count, 10);
    assert_eq!(result.total_score, 100);
    assert_eq!(result.rating(), Rating::Excellent);
    assert_eq!(result.recommendations, vec!["Great job! Resume is well-optimized".to_string()]);
}

#[tokio::test]
async fn test_pdf_pages_extracted_in_order() {
    let dir = TempDir::new().unwrap();
    let page_one: &[&str] = &[
        "Jane Doe",
        "Email: jane@example.com 555-123-4567",
        "Experience",
        "- Led 4 launches",
    ];
    let page_two: &[&str] = &["Education", "Skills"];
    let path = write_fixture(&dir, "resume.pdf", &pdf_bytes(&[page_one, page_two]));

    let text = InputManager::new().extract_text(&path).await.unwrap();
    assert_eq!(
        text.as_str(),
        "Jane Doe Email: jane@example.com 555-123-4567 Experience - Led 4 launches\n\
         Education Skills\n"
    );

    let result = AtsScorer::new().unwrap().analyze(&text);
    assert_eq!(result.section_count, 4);
    assert_eq!(result.word_count, 12);
    assert_eq!(result.breakdown.format_score, 20);
    assert_eq!(result.keyword_count, 1);
    assert_eq!(result.verb_count, 0);
    assert_eq!(result.total_score, 56);
    assert_eq!(result.rating(), Rating::NeedsImprovement);
}

#[tokio::test]
async fn test_pdf_without_text_is_empty_document() {
    let dir = TempDir::new().unwrap();
    let blank: &[&str] = &[];
    let path = write_fixture(&dir, "scanned.pdf", &pdf_bytes(&[blank, blank]));

    let err = InputManager::new().extract_text(&path).await.unwrap_err();
    assert!(matches!(err, ResumeAtsError::EmptyDocument(_)));
}

#[tokio::test]
async fn test_whitespace_only_document_never_reaches_scoring() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "scanned.docx", &docx_bytes(&["   ", "\t"]));

    let input = InputManager::new();
    let err = input.extract_text(&path).await.unwrap_err();
    assert!(matches!(err, ResumeAtsError::EmptyDocument(_)));

    let mut session = AnalysisSession::new();
    let scorer = AtsScorer::new().unwrap();
    let err = session.analyze(&path, &input, &scorer, None).await.unwrap_err();
    assert!(matches!(err, ResumeAtsError::EmptyDocument(_)));
    assert!(matches!(session.state(), SessionState::ErrorShown { file: Some(_), .. }));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "resume.txt", b"Experience Education Skills");

    let err = InputManager::new().extract_text(&path).await.unwrap_err();
    assert!(matches!(err, ResumeAtsError::UnsupportedFormat(_)));
    assert!(err.to_string().contains("Please upload PDF or DOCX"));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let err = InputManager::new()
        .extract_text(Path::new("tests/fixtures/nonexistent.pdf"))
        .await
        .unwrap_err();
    assert!(matches!(err, ResumeAtsError::InvalidInput(_)));
}

#[tokio::test]
async fn test_corrupt_documents_fail_extraction() {
    let dir = TempDir::new().unwrap();
    let input = InputManager::new();

    let pdf = write_fixture(&dir, "broken.pdf", b"this is not a pdf document");
    let err = input.extract_text(&pdf).await.unwrap_err();
    assert!(matches!(err, ResumeAtsError::ExtractionFailed(_)));

    let docx = write_fixture(&dir, "broken.docx", b"not a zip archive");
    let err = input.extract_text(&docx).await.unwrap_err();
    assert!(matches!(err, ResumeAtsError::ExtractionFailed(_)));
}

#[tokio::test]
async fn test_docx_without_document_part() {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer.start_file("word/styles.xml", SimpleFileOptions::default()).unwrap();
    writer.write_all(b"<w:styles/>").unwrap();
    let bytes = writer.finish().unwrap().into_inner();

    let err = InputManager::new()
        .extract_from_bytes(&bytes, FileType::Docx)
        .unwrap_err();
    assert!(matches!(err, ResumeAtsError::ExtractionFailed(_)));
}

#[tokio::test]
async fn test_session_produces_json_report() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "short.docx",
        &docx_bytes(&["Experience", "- Led 3 projects", "Contact: jane@example.com"]),
    );

    let input = InputManager::new();
    let scorer = AtsScorer::new().unwrap();
    let mut session = AnalysisSession::new();

    let report = session.analyze(&path, &input, &scorer, Some(10)).await.unwrap();
    assert_eq!(report.file.name, "short.docx");
    assert_eq!(report.file.file_type, FileType::Docx);
    assert_eq!(report.preview.as_deref(), Some("Experience..."));

    let json = ReportGenerator::with_options(false, false, false)
        .generate_report(report, &OutputFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["result"]["sections"]["experience"], true);
    assert_eq!(value["result"]["has_email"], true);
    assert_eq!(value["metrics"].as_array().unwrap().len(), 4);

    assert_eq!(session.state().name(), "result-shown");
    session.reset().unwrap();
    assert_eq!(session.state().name(), "idle");
}
