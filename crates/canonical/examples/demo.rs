use canonical::{normalize_title, tokenize, vectorize};

fn main() {
    let titles = [
        "  Apple Pie: The Classic Recipe ",
        "apple pie -- the classic recipe!!",
        "Banana Split",
    ];

    for title in titles {
        println!("title:   {title:?}");
        println!("literal: {:?}", normalize_title(title));
        println!("tokens:  {:?}", tokenize(title));

        let vector = vectorize(title);
        let mut counts: Vec<(&str, u32)> = vector.iter().collect();
        counts.sort_unstable();
        println!("vector:  {counts:?} (|v|^2 = {})", vector.magnitude_squared());
        println!();
    }
}
