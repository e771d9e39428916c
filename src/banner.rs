// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
  __  __            _ ____  ____    _____            _
 |  \/  | ___  __ _| |  _ \| __ )  | ____|_  ___ __ | | ___  _ __ ___ _ __
 | |\/| |/ _ \/ _` | | | | |  _ \  |  _| \ \/ / '_ \| |/ _ \| '__/ _ \ '__|
 | |  | |  __/ (_| | | |_| | |_) | | |___ >  <| |_) | | (_) | | |  __/ |
 |_|  |_|\___|\__,_|_|____/|____/  |_____/_/\_\ .__/|_|\___/|_|  \___|_|
                                              |_|

    Recipes from TheMealDB, one query at a time
"#;
    println!("{}", banner);
}
