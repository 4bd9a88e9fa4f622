use crate::image::Image;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::transform::Transform;
use crate::units::Pt;
use id_arena::{Arena, Id};
use pdf_writer::{Content, Finish, Name, Pdf};

/// Where an image is drawn on a page, in PDF user space (origin bottom-left)
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image: Id<Image>,
    pub position: Rect,
}

impl ImageLayout {
    /// Places `image` at `width` x `height` with its top-left corner in the top-left
    /// corner of `media_box`
    pub fn top_left(image: Id<Image>, media_box: &Rect, width: Pt, height: Pt) -> ImageLayout {
        ImageLayout {
            image,
            position: Rect {
                x1: media_box.x1,
                y1: media_box.y2 - height,
                x2: media_box.x1 + width,
                y2: media_box.y2,
            },
        }
    }

    /// The matrix that maps the unit square an image is painted into onto `position`
    pub fn transform(&self) -> Transform {
        Transform::scale(*self.position.width(), *self.position.height())
            .with_translate(*self.position.x1, *self.position.y1)
    }
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Images drawn on the page, bottom-most first
    pub images: Vec<ImageLayout>,
}

impl Page {
    pub fn new(width: Pt, height: Pt) -> Page {
        Page {
            media_box: Rect::from_size(width, height),
            images: Vec::new(),
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.images.push(image);
    }

    fn render(&self) -> Vec<u8> {
        let mut content = Content::new();
        for layout in self.images.iter() {
            content.save_state();
            content.transform(layout.transform().to_array());
            content.x_object(Name(image_name(layout.image).as_bytes()));
            content.restore_state();
        }
        content.finish()
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, images: &Arena<Image>, writer: &mut Pdf) {
        let id = refs.get_or_gen(RefType::Page);
        let page_tree_id = refs.get_or_gen(RefType::PageTree);
        let content_id = refs.gen(RefType::ContentForPage);

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.parent(page_tree_id);

        let mut resources = page.resources();
        let mut resource_xobjects = resources.x_objects();
        for (image_id, _) in images.iter() {
            let image_ref = refs.get_or_gen(RefType::Image(image_id.index()));
            resource_xobjects.pair(Name(image_name(image_id).as_bytes()), image_ref);
        }
        resource_xobjects.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = self.render();
        writer.stream(content_id, rendered.as_slice());
    }
}

fn image_name(image: Id<Image>) -> String {
    format!("I{}", image.index())
}
