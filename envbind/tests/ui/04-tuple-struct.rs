use envbind::Record;

#[derive(Record)]
pub struct Config(pub String);

fn main() {}
