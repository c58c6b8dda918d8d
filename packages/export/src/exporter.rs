use crate::naming::{export_file_name, ExportKind};
use crate::ExportError;
use badgecraft_common::scale_to_fit;
use badgecraft_compiler_html::{compile_stylesheet, render_face, RenderOptions};
use badgecraft_model::{CardFormat, DataRecord, Layout, Orientation, Side};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Device pixels per CSS pixel used when rasterising faces
pub const DEFAULT_RASTER_SCALE: f64 = 2.0;

/// Encoded PNG image of one card face
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl Bitmap {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Paints markup onto a white background
pub trait Rasterizer {
    fn rasterize(&mut self, markup: &str, stylesheet: &str, scale: f64) -> Result<Bitmap, ExportError>;
}

/// Lays bitmaps out as PDF pages
pub trait PdfAssembler {
    fn assemble(&mut self, pages: &[PdfPage], setup: &PageSetup) -> Result<Vec<u8>, ExportError>;
}

/// Page geometry in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfPage {
    pub side: Side,
    pub bitmap: Bitmap,
    pub placement: Placement,
}

/// PDF page size and orientation, taken from the card format
#[derive(Debug, Clone, PartialEq)]
pub struct PageSetup {
    pub orientation: Orientation,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PageSetup {
    pub fn for_format(format: &CardFormat) -> Self {
        Self {
            orientation: format.orientation(),
            width_mm: format.width_mm,
            height_mm: format.height_mm,
        }
    }

    /// Scale `bitmap` uniformly to fit the page and centre it
    pub fn place(&self, bitmap: &Bitmap) -> Placement {
        let size = scale_to_fit(
            f64::from(bitmap.width),
            f64::from(bitmap.height),
            self.width_mm,
            self.height_mm,
        );
        Placement {
            x: (self.width_mm - size.width) / 2.0,
            y: (self.height_mm - size.height) / 2.0,
            width: size.width,
            height: size.height,
        }
    }
}

/// A finished export, ready to be written or downloaded
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub struct Exporter<R, P> {
    rasterizer: R,
    assembler: P,
    options: RenderOptions,
    scale: f64,
}

impl<R: Rasterizer, P: PdfAssembler> Exporter<R, P> {
    pub fn new(rasterizer: R, assembler: P) -> Self {
        Self {
            rasterizer,
            assembler,
            options: RenderOptions::default(),
            scale: DEFAULT_RASTER_SCALE,
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    pub fn assembler(&self) -> &P {
        &self.assembler
    }

    /// Faces worth exporting: the front, plus the back when it has placeholders
    pub fn faces(layout: &Layout) -> Vec<Side> {
        let mut faces = vec![Side::Front];
        if layout.has_elements_on(Side::Back) {
            faces.push(Side::Back);
        }
        faces
    }

    /// PNG of the front face
    pub fn export_png(&mut self, layout: &Layout, record: &DataRecord) -> Result<ExportArtifact, ExportError> {
        let bitmap = self.rasterize_face(layout, record, Side::Front)?;
        let file_name = export_file_name(record, ExportKind::Png);

        info!(file = %file_name, width = bitmap.width, height = bitmap.height, "Exported image");
        Ok(ExportArtifact {
            file_name,
            bytes: bitmap.png,
        })
    }

    /// One PDF page per exported face
    pub fn export_pdf(&mut self, layout: &Layout, record: &DataRecord) -> Result<ExportArtifact, ExportError> {
        let setup = PageSetup::for_format(&layout.format);

        let mut pages = Vec::new();
        for side in Self::faces(layout) {
            let bitmap = self.rasterize_face(layout, record, side)?;
            let placement = setup.place(&bitmap);
            pages.push(PdfPage {
                side,
                bitmap,
                placement,
            });
        }

        let bytes = self.assembler.assemble(&pages, &setup).map_err(|e| {
            warn!(error = %e, "PDF assembly failed");
            e
        })?;
        let file_name = export_file_name(record, ExportKind::Pdf);

        info!(file = %file_name, pages = pages.len(), "Exported PDF");
        Ok(ExportArtifact { file_name, bytes })
    }

    fn rasterize_face(&mut self, layout: &Layout, record: &DataRecord, side: Side) -> Result<Bitmap, ExportError> {
        let markup = render_face(layout, record, side, &self.options);
        let stylesheet = compile_stylesheet(&layout.format);

        let bitmap = self
            .rasterizer
            .rasterize(&markup, &stylesheet, self.scale)
            .map_err(|e| {
                warn!(side = side.as_str(), error = %e, "Rasterisation failed");
                e
            })?;
        if bitmap.is_empty() {
            return Err(ExportError::Empty(format!("{} face rendered no pixels", side.as_str())));
        }

        debug!(side = side.as_str(), width = bitmap.width, height = bitmap.height, "Rasterised face");
        Ok(bitmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use badgecraft_model::{ElementType, PlaceholderElement};
    use serde_json::json;

    #[derive(Default)]
    struct FakeRasterizer {
        calls: Vec<(String, f64)>,
        fail: bool,
        size: (u32, u32),
    }

    impl Rasterizer for FakeRasterizer {
        fn rasterize(&mut self, markup: &str, _stylesheet: &str, scale: f64) -> Result<Bitmap, ExportError> {
            if self.fail {
                return Err(ExportError::Raster("renderer crashed".to_string()));
            }
            self.calls.push((markup.to_string(), scale));
            Ok(Bitmap {
                width: self.size.0,
                height: self.size.1,
                png: vec![0x89, b'P', b'N', b'G', self.calls.len() as u8],
            })
        }
    }

    #[derive(Default)]
    struct FakeAssembler {
        pages: Vec<PdfPage>,
        setup: Option<PageSetup>,
    }

    impl PdfAssembler for FakeAssembler {
        fn assemble(&mut self, pages: &[PdfPage], setup: &PageSetup) -> Result<Vec<u8>, ExportError> {
            self.pages = pages.to_vec();
            self.setup = Some(setup.clone());
            Ok(b"%PDF-1.4".to_vec())
        }
    }

    fn rasterizer(width: u32, height: u32) -> FakeRasterizer {
        FakeRasterizer {
            size: (width, height),
            ..FakeRasterizer::default()
        }
    }

    fn record() -> DataRecord {
        let mut record = DataRecord::new();
        record.insert("name", json!("RUETHEMANN, Christoph"));
        record.insert("function", json!("official"));
        record
    }

    fn layout(with_back: bool) -> Layout {
        let mut placeholders = vec![PlaceholderElement::new("name", ElementType::Text, "name", 50.0, 100.0)];
        if with_back {
            placeholders.push(
                PlaceholderElement::new("card", ElementType::Text, "cardId", 10.0, 10.0).with_side(Side::Back),
            );
        }
        Layout::new(CardFormat::a5_landscape()).with_placeholders(placeholders)
    }

    #[test]
    fn test_png_export() {
        let mut exporter = Exporter::new(rasterizer(1588, 1120), FakeAssembler::default());
        let artifact = exporter.export_png(&layout(true), &record()).unwrap();

        assert_eq!(artifact.file_name, "RUETHEMANN,_Christoph_official_card.png");
        assert_eq!(artifact.bytes[..4], [0x89, b'P', b'N', b'G']);

        let calls = &exporter.rasterizer().calls;
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.contains("card-side front standalone"));
        assert_eq!(calls[0].1, DEFAULT_RASTER_SCALE);
    }

    #[test]
    fn test_pdf_skips_empty_back() {
        let mut exporter = Exporter::new(rasterizer(1588, 1120), FakeAssembler::default());
        let artifact = exporter.export_pdf(&layout(false), &record()).unwrap();

        assert_eq!(artifact.file_name, "RUETHEMANN,_Christoph_official_card.pdf");
        assert_eq!(artifact.bytes, b"%PDF-1.4".to_vec());
        assert_eq!(exporter.assembler().pages.len(), 1);
    }

    #[test]
    fn test_pdf_pages_per_face() {
        let mut exporter = Exporter::new(rasterizer(1588, 1120), FakeAssembler::default()).with_scale(3.0);
        exporter.export_pdf(&layout(true), &record()).unwrap();

        let sides: Vec<Side> = exporter.assembler().pages.iter().map(|p| p.side).collect();
        assert_eq!(sides, vec![Side::Front, Side::Back]);

        let setup = exporter.assembler().setup.clone().unwrap();
        assert_eq!(setup.orientation, Orientation::Landscape);
        assert_eq!((setup.width_mm, setup.height_mm), (210.0, 148.0));

        let markups: Vec<&str> = exporter.rasterizer().calls.iter().map(|(m, _)| m.as_str()).collect();
        assert!(markups[1].contains("card-side back standalone"));
        assert!(exporter.rasterizer().calls.iter().all(|(_, scale)| *scale == 3.0));
    }

    #[test]
    fn test_placement_centres_and_fits() {
        let setup = PageSetup::for_format(&CardFormat::a4_landscape());
        let bitmap = Bitmap {
            width: 1000,
            height: 1000,
            png: Vec::new(),
        };

        let placement = setup.place(&bitmap);
        assert_eq!((placement.width, placement.height), (210.0, 210.0));
        assert_eq!((placement.x, placement.y), (43.5, 0.0));
    }

    #[test]
    fn test_failures_are_returned() {
        let failing = FakeRasterizer {
            fail: true,
            ..FakeRasterizer::default()
        };
        let mut exporter = Exporter::new(failing, FakeAssembler::default());
        assert!(matches!(
            exporter.export_pdf(&layout(true), &record()),
            Err(ExportError::Raster(_))
        ));
        assert!(exporter.assembler().pages.is_empty());

        let mut blank = Exporter::new(rasterizer(0, 0), FakeAssembler::default());
        assert!(matches!(
            blank.export_png(&layout(false), &record()),
            Err(ExportError::Empty(_))
        ));
    }
}
