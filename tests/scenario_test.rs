mod common;
use common::*;

// Whole programs leaning on several features at once.

#[test]
fn test_countdown() {
    let source = "\
input n
Again
print n
n -= 1
if n > 0 then goto Again
print \"liftoff!\"";
    assert_eq!(
        exec_with_inputs(source, &["3"]),
        "3\n2\n1\nliftoff!\n"
    );
}

#[test]
fn test_fizzbuzz_slice() {
    let source = "\
for n in 1 to 16
gosub Judge
next
end
Judge
if n % 15 == 0 then goto Fizzbuzz
if n % 3 == 0 then goto Fizz
if n % 5 == 0 then goto Buzz
print n
return
Fizzbuzz
print \"fizzbuzz\"
return
Fizz
print \"fizz\"
return
Buzz
print \"buzz\"
return";
    assert_eq!(
        exec(source),
        "1\n2\nfizz\n4\nbuzz\nfizz\n7\n8\nfizz\nbuzz\n11\nfizz\n13\n14\nfizzbuzz\n"
    );
}

#[test]
fn test_squares_table() {
    let source = "\
for n in 1 to 6
squares[n] = n * n
next
print squares
print squares[count(squares)]";
    assert_eq!(
        exec(source),
        "[1 = 1, 2 = 4, 3 = 9, 4 = 16, 5 = 25]\n25\n"
    );
}

#[test]
fn test_grade_book() {
    let source = "\
grades = [\"Ada\":95, \"Brian\":82]
grades[\"Ada\"] += 5
input name
print name, \" scored \", grades[name]";
    assert_eq!(
        exec_with_inputs(source, &["Ada"]),
        "Ada scored 100\n"
    );
}

#[test]
fn test_emoji_program() {
    let source = "\
🍪 = \"🍪\"
jar = 🍪 * 3
print jar, \" has \", len(jar), \" cookies\"";
    assert_eq!(exec(source), "🍪🍪🍪 has 3 cookies\n");
}

#[test]
fn test_interest_accumulates() {
    let source = "\
balance = 100.0
for year in 1 to 4
balance *= 2
next
print balance";
    assert_eq!(exec(source), "800.0\n");
}

#[test]
fn test_state_survives_between_runs() {
    let (mut r, output) = runtime("total = 1\ntotal += 1");
    r.run().unwrap();
    // Only load_code resets the symbols; run may be called again and
    // starts over from the top.
    r.run().unwrap();
    assert_eq!(*output.borrow(), "");
    assert_eq!(
        r.symbols().get("total"),
        Some(&cyclone::mach::Val::Int(2))
    );
}
