use envbind::Record;

#[derive(Record)]
pub struct Config<T> {
    #[env(from = "A")]
    pub a: T,
}

fn main() {}
