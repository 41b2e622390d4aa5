use std::io;
use std::io::Cursor;

use bounded_records::sources::LineSource;
use bounded_records::ReadBound;

fn main() -> io::Result<()> {
    let reads = "read-1\nread-2\nread-3\nread-4\nread-5\n";

    // Only the first 3 reads are consumed from the source
    let bound = ReadBound::new(3);
    let mut seq = bound.apply(LineSource::new(Cursor::new(reads)));

    while seq.has_more()? {
        let read = seq.next_record()?;
        println!("Read: {}", read);
    }

    // `has_more()` returning false already closed the source
    println!("Stat: {}", seq.stat());

    // Iterating a closed sequence yields nothing
    assert_eq!(seq.iter().count(), 0);

    Ok(())
}
