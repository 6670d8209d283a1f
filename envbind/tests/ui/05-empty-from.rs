use envbind::Record;

#[derive(Record)]
pub struct Config {
    #[env(from = "", required)]
    pub x: String,
}

fn main() {}
