use thunk_list::{ConsList, Thunk, conj};

fn main() {
    println!("\n[Thunk]\n");

    let naturals = Thunk::iterate(0_u64, |n| n + 1);

    let squares = naturals.map(|n| n * n);
    println!("first squares: {:?}", squares.take(8).to_vec());

    let odd_squares = squares.filter(|n| n % 2 == 1).take_while(|n| *n < 200);
    println!("odd squares below 200: {:?}", odd_squares.fold(Vec::new(), conj));

    let fibonacci = Thunk::unfold((0_u64, 1_u64), |&(a, b)| Some((a, (b, a + b))));
    let labelled = naturals.zip(&fibonacci).take(10);
    for (index, value) in &labelled {
        println!("fib({index}) = {value}");
    }

    println!("sum of first 100 naturals: {}", naturals.take(100).fold(0, |acc, n| acc + n));

    println!("\n[ConsList]\n");

    let base = ["c", "d"].into_iter().collect::<ConsList<_>>();
    let left = base.cons("b").cons("a");
    let right = base.cons("x");
    println!("{left}");
    println!("{right}");
    println!("shared tail: {}", left.tail().tail().ptr_eq(&right.tail()));

    let shouted = Thunk::from(left).map(|s| s.to_uppercase());
    println!("{:?}", shouted.to_vec());
}
