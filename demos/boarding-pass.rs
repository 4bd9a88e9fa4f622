use futures::executor::block_on;
use std::rc::Rc;
use ticket_pdf::{export_to_document, ExportOptions, Font, TicketCard, TicketField, TicketRecord};

fn main() {
    env_logger::init();

    // any TrueType font can be passed in, e.g.
    // `cargo run --example boarding-pass -- /usr/share/fonts/truetype/dejavu/DejaVuSans.ttf`
    let bytes = match std::env::args().nth(1) {
        Some(path) => std::fs::read(&path).expect("can read font"),
        None => include_bytes!("../assets/DejaVuSans-Bold.ttf").to_vec(),
    };
    let font = Rc::new(Font::load(bytes).expect("can parse font"));

    // edit the sample record the way a form would
    let mut record = TicketRecord::default();
    record
        .set(TicketField::FullName, "ALEX MORGAN")
        .set(TicketField::Seat, "14C")
        .set(TicketField::Sequence, "SEQ 14C");

    // draw the card onto a scene the size of the card
    let card = TicketCard::default();
    let mut scene = card.scene(Some(font));
    card.draw(&record, &mut scene);

    // capture it at 4x and wrap it in a 210mm wide page
    let handle = block_on(export_to_document(&scene, &record, &ExportOptions::default()))
        .expect("can export the card");

    let out = std::fs::File::create(&handle.name).expect("can create the output file");
    handle.write(out).expect("can write the document");
    println!("wrote {}", handle.name);
}
