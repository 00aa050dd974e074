use folio::app::App;
use folio::error::user_message;

#[tokio::main]
async fn main() {
    let mut app = match App::new() {
        Ok(app) => app,
        Err(err) => {
            eprintln!("{}", user_message(&err));
            std::process::exit(1);
        }
    };

    if let Err(err) = app.init() {
        eprintln!("{}", user_message(&err));
        std::process::exit(1);
    }

    let result = app.run().await;

    // Leave the alternate screen before reporting anything
    app.restore();

    if let Err(err) = result {
        eprintln!("{}", user_message(&err));
        std::process::exit(1);
    }
}
