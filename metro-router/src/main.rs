use metro_router::domain::StationId;
use metro_router::sample::sample_network;

/// The demo queries: station pairs from the sample map.
const QUERIES: [(&str, &str); 6] = [
    ("B", "G"),
    ("L", "H"),
    ("A", "O"),
    ("C", "E"),
    ("F", "K"),
    ("D", "D"),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let network = sample_network();

    for (start, end) in QUERIES {
        let start = StationId::new(start.to_string()).expect("query ids are non-empty");
        let end = StationId::new(end.to_string()).expect("query ids are non-empty");

        match network.shortest_path(&start, &end) {
            Ok(result) => println!("{result}"),
            Err(e) => eprintln!("query '{start}' -> '{end}' failed: {e}"),
        }
    }
}
