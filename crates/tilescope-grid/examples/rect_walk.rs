use tilescope_grid::{GridPoint, GridRect, RectIter};

fn main() {
    // A 4x3 block of cells, lower-left corner at (-1, 2)
    let rect = GridRect::new(-1, 2, 3, 5).unwrap();
    println!("Walking {} ({} cells)", rect, rect.len());

    let mut it = RectIter::from_rect(rect);
    let mut row = None;
    for p in it.by_ref() {
        if row != Some(p.y) {
            if row.is_some() {
                println!();
            }
            print!("row {:>2}:", p.y);
            row = Some(p.y);
        }
        print!(" {}", p);
    }
    println!();

    // Walk the same rectangle again, reusing one scratch point
    let mut scratch = GridPoint::default();
    let mut count = 0;
    it.reset();
    while it.next_into(&mut scratch) {
        count += 1;
    }
    println!("\nSecond pass visited {} cells, last was {}", count, scratch);

    let origin = GridPoint::new(0, 0);
    let corner = GridPoint::new(3, 4);
    println!(
        "Distance {} -> {}: squared = {}, euclidean = {:.1}",
        origin,
        corner,
        origin.dst2(corner),
        origin.dst(corner)
    );

    match RectIter::new(3, 0, 1, 2) {
        Ok(_) => println!("unexpected: out-of-order rectangle accepted"),
        Err(e) => println!("Out-of-order rectangle rejected: {}", e),
    }
}
