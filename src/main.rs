use dynoload::entry;
use dynoload::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
