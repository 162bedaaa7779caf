use bonus_pdf::layout::wrap_spans;
use bonus_pdf::theme::names;
use bonus_pdf::{
    Block, BonusDocument, BrandTheme, BrandedDecorator, DocumentBuilder, DocumentError, NoDecoration,
    PageCanvas, PageSetup, ParagraphStyle, Span, StyleRegistry,
};
use lopdf::Document;
use sha2::{Digest, Sha256};

fn sample_document() -> DocumentBuilder {
    let mut document = DocumentBuilder::new(StyleRegistry::from_theme(&BrandTheme::tribebuild()));
    document
        .paragraph(names::MAIN_TITLE, "Olá, PDF!")
        .expect("title markup");
    document
        .paragraph(names::BODY, "Um parágrafo com **negrito** e *itálico*.")
        .expect("body markup");
    document
}

fn render_sample_pdf() -> Vec<u8> {
    let document = sample_document();
    let decorator = BrandedDecorator::new(&BrandTheme::tribebuild(), document.page_setup());
    document
        .render_to_vec(decorator)
        .expect("render sample pdf")
        .bytes
}

fn hash(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

/// Words needed for a paragraph that fills one and a half content areas.
fn one_and_a_half_pages_of_text(style: &ParagraphStyle, setup: &PageSetup) -> String {
    let lines_per_page = (setup.content_height() / style.leading).floor() as usize;
    let target = lines_per_page + lines_per_page / 2;
    let mut text = String::new();
    let mut word = 0;
    loop {
        let candidate = format!("{text} palavra{word}");
        let lines = wrap_spans(&[Span::new(candidate.trim())], style, setup.content_width());
        if lines.len() > target {
            return text.trim().to_owned();
        }
        text = candidate;
        word += 1;
    }
}

#[test]
fn renders_non_empty_output() {
    let bytes = render_sample_pdf();
    assert!(
        bytes.starts_with(b"%PDF-"),
        "rendered PDF should contain at least a header"
    );
}

#[test]
fn rendering_is_deterministic() {
    let bytes_a = render_sample_pdf();
    let bytes_b = render_sample_pdf();

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");
    assert_eq!(
        hash(&bytes_a),
        hash(&bytes_b),
        "PDF renders must be byte-identical"
    );
}

#[test]
fn decorator_runs_once_per_page_in_order() {
    let mut document = sample_document();
    document.page_break();
    document.paragraph(names::BODY, "segunda").unwrap();
    document.page_break();
    document.paragraph(names::BODY, "terceira").unwrap();

    let mut seen = Vec::new();
    let report = document
        .render_to_vec(|canvas: &mut PageCanvas| seen.push(canvas.page_number()))
        .unwrap()
        .report;

    assert_eq!(report.page_count, 3);
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn page_break_forces_following_block_onto_new_page() {
    let mut document = sample_document();
    document.page_break();
    document.paragraph(names::H1, "Próxima seção").unwrap();

    let plan = document.layout().unwrap();
    assert_eq!(plan.page_count(), 2);
    assert_eq!(plan.placement(1).map(|p| p.last_page), Some(1));
    assert_eq!(plan.placement(3).map(|p| p.first_page), Some(2));
}

#[test]
fn long_paragraph_flows_onto_second_page() {
    let style = ParagraphStyle::new(11.0).with_leading(16.0);
    let setup = PageSetup::default();

    let mut document = DocumentBuilder::new(StyleRegistry::new().with_style("Body", style.clone()));
    let text = one_and_a_half_pages_of_text(&style, &setup);
    document.append(Block::text("Body", text));
    document.spacer(30.0);
    document.paragraph("Body", "Fim.").unwrap();

    let mut pages = Vec::new();
    let report = document
        .render_to_vec(|canvas: &mut PageCanvas| pages.push(canvas.page_number()))
        .unwrap()
        .report;

    assert_eq!(report.page_count, 2);
    assert_eq!(pages, vec![1, 2]);
    let long = report.block_pages[0];
    assert_eq!((long.first_page, long.last_page), (1, 2));
    let spacer = report.block_pages[1];
    assert_eq!((spacer.first_page, spacer.last_page), (2, 2));
    let short = report.block_pages[2];
    assert_eq!((short.first_page, short.last_page), (2, 2));
}

#[test]
fn reloaded_pdf_matches_layout_and_outline() {
    let theme = BrandTheme::tribebuild();
    let builder = BonusDocument::LaunchGuide.build(&theme).unwrap();
    let plan = builder.layout().unwrap();
    let bytes = builder
        .render_to_vec(BrandedDecorator::new(&theme, builder.page_setup()))
        .unwrap()
        .bytes;

    let document = Document::load_mem(&bytes).expect("reload rendered pdf");
    assert_eq!(document.get_pages().len(), plan.page_count());

    let root = document
        .trailer
        .get(b"Root")
        .and_then(|root| root.as_reference())
        .unwrap();
    let catalog = document.get_dictionary(root).unwrap();
    let outlines = catalog
        .get(b"Outlines")
        .and_then(|outlines| outlines.as_reference())
        .unwrap();
    let count = document
        .get_dictionary(outlines)
        .unwrap()
        .get(b"Count")
        .and_then(|count| count.as_i64())
        .unwrap();
    assert_eq!(count as usize, plan.bookmarks().len());
}

#[test]
fn disabled_bookmarks_write_no_outline() {
    let theme = BrandTheme::tribebuild();
    let builder = BonusDocument::LaunchGuide
        .build(&theme)
        .unwrap()
        .with_bookmarks(false);
    assert!(!builder.layout().unwrap().bookmarks().is_empty());

    let bytes = builder.render_to_vec(NoDecoration).unwrap().bytes;
    let document = Document::load_mem(&bytes).unwrap();
    let root = document
        .trailer
        .get(b"Root")
        .and_then(|root| root.as_reference())
        .unwrap();
    let catalog = document.get_dictionary(root).unwrap();
    assert!(catalog.get(b"Outlines").is_err());
}

#[test]
fn missing_parent_directory_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nao-existe").join("saida.pdf");

    let err = sample_document()
        .render(&target, NoDecoration)
        .expect_err("parent directory is missing");
    match err {
        DocumentError::Io { path, .. } => assert_eq!(path, target),
        other => panic!("unexpected error {other:?}"),
    }
    assert!(!target.exists());
}

#[test]
fn unknown_style_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("erro.pdf");
    let mut document = sample_document();
    document.paragraph("Inexistente", "texto").unwrap();

    let err = document.render(&target, NoDecoration).unwrap_err();
    assert!(matches!(err, DocumentError::StyleNotFound(ref missing) if missing.name == "Inexistente"));
    assert!(!target.exists());
}

#[test]
fn generates_all_bonus_documents() {
    let dir = tempfile::tempdir().unwrap();
    let results = bonus_pdf::generate_all(dir.path(), &BrandTheme::tribebuild());

    assert_eq!(results.len(), 3);
    for generated in &results {
        let report = generated.result.as_ref().expect("document renders");
        let bytes = std::fs::read(&generated.path).unwrap();
        let document = Document::load_mem(&bytes).unwrap();
        assert_eq!(document.get_pages().len(), report.page_count, "{}", generated.document);
    }
}

#[test]
fn failing_document_does_not_stop_the_others() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join(BonusDocument::LaunchGuide.file_name());
    std::fs::create_dir(&blocker).unwrap();

    let results = bonus_pdf::generate_all(dir.path(), &BrandTheme::tribebuild());
    let failed: Vec<_> = results
        .iter()
        .filter(|generated| generated.result.is_err())
        .map(|generated| generated.document)
        .collect();

    assert_eq!(failed, vec![BonusDocument::LaunchGuide]);
    assert!(dir.path().join(BonusDocument::Templates.file_name()).is_file());
    assert!(dir.path().join(BonusDocument::Checklist.file_name()).is_file());
}
