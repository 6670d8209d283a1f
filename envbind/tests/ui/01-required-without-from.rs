use envbind::Record;

#[derive(Record)]
pub struct Config {
    #[env(required)]
    pub a: String,
}

fn main() {}
