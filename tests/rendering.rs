use formpdf::{
    ContentBlock, ImageBlock, InvalidBlockReason, PageGeometry, PaginatedDocumentBuilder,
};
use sha2::{Digest, Sha256};

fn sample_blocks() -> Vec<ContentBlock> {
    let mut blocks = vec![
        ContentBlock::heading("Generated PDF"),
        ContentBlock::record_line("Name: Ada"),
        ContentBlock::paragraph(
            "A short description that wraps onto more than one line. ".repeat(8),
        ),
        ContentBlock::image(ImageBlock::new(vec![200; 4 * 2 * 3], 4, 2).with_width(190.0)),
        ContentBlock::heading("Rows"),
    ];
    for index in 0..40 {
        blocks.push(ContentBlock::record_line(format!(r#"{{"row":{index}}}"#)));
    }
    blocks
}

fn render_sample_pdf(outline: bool) -> Vec<u8> {
    PaginatedDocumentBuilder::new()
        .with_geometry(PageGeometry::a4())
        .with_title("Sample".to_owned())
        .with_outline(outline)
        .build(&sample_blocks())
        .expect("render sample pdf")
        .into_bytes()
}

fn digest(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[test]
fn renders_non_empty_output() {
    let bytes = render_sample_pdf(false);
    assert!(
        bytes.starts_with(b"%PDF-"),
        "rendered PDF should start with a header"
    );
}

#[test]
fn rendering_is_deterministic() {
    let bytes_a = render_sample_pdf(true);
    let bytes_b = render_sample_pdf(true);

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");
    assert_eq!(
        digest(&bytes_a),
        digest(&bytes_b),
        "PDF renders must be byte-identical"
    );
    assert!(!contains(&bytes_a, b"/CreationDate"));
}

#[test]
fn parsed_page_count_matches_document() {
    let document = PaginatedDocumentBuilder::new()
        .with_geometry(PageGeometry::a4())
        .build(&sample_blocks())
        .expect("build sample");
    assert!(document.page_count() > 1);

    let parsed = lopdf::Document::load_mem(document.bytes()).expect("parse rendered pdf");
    assert_eq!(parsed.get_pages().len(), document.page_count());
}

#[test]
fn outline_is_written_only_when_enabled() {
    assert!(contains(&render_sample_pdf(true), b"/Outlines"));
    assert!(!contains(&render_sample_pdf(false), b"/Outlines"));
}

#[test]
fn title_is_written_to_info_dictionary() {
    assert!(contains(&render_sample_pdf(false), b"(Sample)"));
}

#[test]
fn placements_never_cross_the_bottom_margin() {
    let geometry = PageGeometry::a4();
    let document = formpdf::build(&sample_blocks(), geometry).expect("build sample");
    let mut last_page = 0;
    for placed in document.placements() {
        assert!(placed.page >= last_page, "pages must not go backwards");
        assert!(placed.top + placed.height <= geometry.bottom_limit() + 1e-9);
        last_page = placed.page;
    }
    assert_eq!(last_page + 1, document.page_count());
}

#[test]
fn zero_height_image_is_skipped_with_a_warning() {
    let blocks = vec![
        ContentBlock::heading("Photos"),
        ContentBlock::image(ImageBlock::new(Vec::new(), 10, 0)),
        ContentBlock::paragraph("after"),
    ];
    let document = formpdf::build(&blocks, PageGeometry::a4()).expect("build");

    assert_eq!(document.page_count(), 1);
    assert_eq!(document.warnings().len(), 1);
    let warning = &document.warnings()[0];
    assert_eq!(warning.block_index, 1);
    assert_eq!(
        warning.reason,
        InvalidBlockReason::ZeroSourceDimension {
            width: 10,
            height: 0
        }
    );

    let indices: Vec<_> = document
        .placements()
        .iter()
        .map(|placed| placed.block_index)
        .collect();
    assert_eq!(indices, vec![0, 2]);
}
