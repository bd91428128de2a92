use ocsp_loadgen::error::AppResult;

fn main() -> AppResult<()> {
    ocsp_loadgen::entry::run()
}
