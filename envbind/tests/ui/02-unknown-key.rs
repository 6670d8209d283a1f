use envbind::Record;

#[derive(Record)]
pub struct Config {
    #[env(nested)]
    pub kafka: String,
}

fn main() {}
