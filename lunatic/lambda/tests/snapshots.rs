use lunatic_lambda::strings::{mono_space, title, trim_lines};
use lunatic_lambda::{compose, partial, pipe};
use lunatic_lambda::combinators::Step;

#[test]
fn test_title_message() {
    insta::assert_snapshot!(title("welcome to the  castle"), @"Welcome To The  Castle");
}

#[test]
fn test_help_text_cleanup() {
    let raw = "  Press OK   to continue.  \r\n\n   Cancel   returns.";
    // The blank line is a whitespace run too, so it folds into one space.
    insta::assert_snapshot!(mono_space(&trim_lines(raw)), @"Press OK to continue. Cancel returns.");
}

#[test]
fn test_damage_formula() {
    let scale = partial(|factor: i32, x: i32| x * factor, 3);
    let steps: Vec<Step<i32>> = vec![
        Box::new(move |x: i32| scale(x)) as Step<i32>,
        Box::new(|x: i32| x - 4) as Step<i32>,
    ];
    let forward = pipe(steps);
    insta::assert_snapshot!(forward(10).to_string(), @"26");

    let steps: Vec<Step<i32>> = vec![
        Box::new(|x: i32| x * 3) as Step<i32>,
        Box::new(|x: i32| x - 4) as Step<i32>,
    ];
    let backward = compose(steps);
    insta::assert_snapshot!(backward(10).to_string(), @"18");
}
