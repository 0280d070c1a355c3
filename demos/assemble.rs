//! A mock request/response exchange over a stream object put together
//! from three unrelated pieces, followed by an ordered teardown.
//!
//! Run with `cargo run --example assemble --features std`.

use std::io::Cursor;
use std::str;

use io_parts::{
    adapters::FromStd, nb::block, Close, CloseFn, MultiCloser, Read, ReadWriteClose, Write,
};

fn main() {
    // Read side: canned request bytes. Write side: a response buffer.
    // Close side: a callback standing in for connection teardown.
    let request = FromStd::new(Cursor::new(b"PING room-7\n".to_vec()));
    let response = FromStd::new(Vec::new());
    let teardown = CloseFn::new(|| -> Result<(), std::io::Error> {
        println!("conn: torn down");
        Ok(())
    });

    let mut conn = ReadWriteClose::new(request, response, teardown);

    let mut buf = [0; 32];
    let n = block!(conn.read(&mut buf)).unwrap();
    print!("conn: got  {}", str::from_utf8(&buf[..n]).unwrap());

    conn.write_all(b"PONG room-7\n").unwrap();
    conn.close().unwrap();

    let (_, response, _) = conn.into_parts();
    let sent = response.into_inner();
    print!("conn: sent {}", str::from_utf8(&sent).unwrap());

    // Now a whole stack of resources closed in order. The socket reports
    // a failure; the journal behind it still gets closed, and only the
    // socket's error comes back.
    let mut session = CloseFn::new(|| -> Result<(), &'static str> {
        println!("session: closed");
        Ok(())
    });
    let mut socket = CloseFn::new(|| -> Result<(), &'static str> {
        println!("socket: closed");
        Err("peer already gone")
    });
    let mut journal = CloseFn::new(|| -> Result<(), &'static str> {
        println!("journal: closed");
        Ok(())
    });

    let mut stack: MultiCloser<&mut dyn Close<Error = &'static str>, 4> = MultiCloser::new();
    let _ = stack.push(&mut session);
    let _ = stack.push(&mut socket);
    let _ = stack.push(&mut journal);

    match stack.close() {
        Ok(()) => println!("stack: all closed"),
        Err(e) => println!("stack: first failure: {}", e),
    }
}
