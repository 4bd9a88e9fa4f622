use crate::{
    error::ExportError,
    image::Image,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf};
use std::io::Write;

/// A single-page PDF: one page, the images drawn on it and optional metadata.
/// Nothing is encoded until [Document::write] or [Document::to_bytes] is called.
pub struct Document {
    pub info: Option<Info>,
    pub page: Page,
    pub images: Arena<Image>,
}

impl Document {
    pub fn new(page: Page) -> Document {
        Document {
            info: None,
            page,
            images: Arena::new(),
        }
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add an image to the document. The returned id is what the page refers to it by.
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Encode the whole document in memory
    pub fn to_bytes(self) -> Vec<u8> {
        let Document { info, page, images } = self;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);
        let page_id = refs.gen(RefType::Page);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        writer.pages(page_tree_id).count(1).kids([page_id]);

        for (id, image) in images.iter() {
            image.write(&mut refs, id.index(), &mut writer);
        }

        page.write(&mut refs, &images, &mut writer);

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        writer.finish()
    }

    /// Write the entire document to `w`. The document is rendered in memory first.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), ExportError> {
        w.write_all(self.to_bytes().as_slice()).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageCompression;
    use crate::page::ImageLayout;
    use crate::units::Pt;
    use image::{Rgba, RgbaImage};

    #[test]
    fn writes_a_single_page_pdf() {
        let mut document = Document::new(Page::new(Pt(300.0), Pt(100.0)));
        let image = document.add_image(Image::new(
            RgbaImage::from_pixel(3, 1, Rgba([255, 0, 0, 255])),
            ImageCompression::None,
        ));
        let media_box = document.page.media_box;
        document
            .page
            .add_image(ImageLayout::top_left(image, &media_box, Pt(300.0), Pt(100.0)));
        document.set_info(Info::new().title("test").clone());

        let mut out = Vec::new();
        document.write(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(out.starts_with(b"%PDF-"));
        assert!(text.contains("/Type /Page"));
        assert!(text.contains("/Subtype /Image"));
        assert!(text.contains("/MediaBox [0 0 300 100]"));
        assert!(text.contains("/Title (test)"));
        assert!(!text.contains("/SMask"));
    }
}
