use fetchpoll::error::AppResult;

fn main() -> AppResult<()> {
    fetchpoll::entry::run()
}
