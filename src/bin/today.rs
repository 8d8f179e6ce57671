use civil_date::CivilDate;

fn main() {
    match CivilDate::today() {
        Ok(today) => println!("{today}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
