use crate::round::{
    config::{Round, RoundContent, RoundId, Subject},
    question::{Answer, Question},
};

/// A four-option multiple choice question, `correct` being the index of
/// the right option
fn question(id: &str, text: &str, options: [&str; 4], correct: usize) -> Question {
    Question::multiple_choice(
        id,
        text,
        options
            .iter()
            .enumerate()
            .map(|(i, option)| Answer::new(*option, i == correct))
            .collect(),
    )
}

fn linear(id: u32, title: &str, description: &str, questions: Vec<Question>) -> Round {
    Round {
        id: RoundId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        rapid_fire: false,
        content: RoundContent::Linear { questions },
    }
}

fn subject(id: &str, name: &str, questions: Vec<Question>) -> Subject {
    Subject {
        id: id.into(),
        name: name.to_owned(),
        questions,
    }
}

pub(super) fn rounds() -> Vec<Round> {
    vec![
        linear(
            1,
            "General Knowledge",
            "Test your knowledge across a variety of topics!",
            vec![
                question(
                    "q1-1",
                    "What is the capital of France?",
                    ["London", "Berlin", "Paris", "Madrid"],
                    2,
                ),
                question(
                    "q1-2",
                    "Who wrote 'Romeo and Juliet'?",
                    ["Charles Dickens", "William Shakespeare", "Jane Austen", "Mark Twain"],
                    1,
                ),
            ],
        ),
        linear(
            2,
            "Science & Technology",
            "Explore the wonders of science and technology!",
            vec![
                question(
                    "q2-1",
                    "What planet is known as the Red Planet?",
                    ["Venus", "Mars", "Jupiter", "Saturn"],
                    1,
                ),
                question(
                    "q2-2",
                    "What is the chemical symbol for gold?",
                    ["Go", "Gd", "Au", "Ag"],
                    2,
                ),
            ],
        ),
        Round {
            id: RoundId::new(3),
            title: "Choose Your Topic".to_owned(),
            description: "Select from a variety of subjects and answer questions!".to_owned(),
            rapid_fire: false,
            content: RoundContent::Special {
                subjects: vec![
                    subject(
                        "sports",
                        "Sports",
                        vec![
                            question(
                                "sports-1",
                                "Which country won the FIFA World Cup in 2018?",
                                ["Brazil", "Germany", "France", "Argentina"],
                                2,
                            ),
                            question(
                                "sports-2",
                                "How many players are on a standard basketball team on the court?",
                                ["4", "5", "6", "7"],
                                1,
                            ),
                        ],
                    ),
                    subject(
                        "history",
                        "History",
                        vec![
                            question(
                                "history-1",
                                "In what year did World War II end?",
                                ["1943", "1945", "1947", "1950"],
                                1,
                            ),
                            question(
                                "history-2",
                                "Who was the first President of the United States?",
                                [
                                    "Thomas Jefferson",
                                    "John Adams",
                                    "George Washington",
                                    "Abraham Lincoln",
                                ],
                                2,
                            ),
                        ],
                    ),
                    subject(
                        "movies",
                        "Movies",
                        vec![
                            question(
                                "movies-1",
                                "Who directed the movie 'Jaws'?",
                                [
                                    "Steven Spielberg",
                                    "George Lucas",
                                    "Martin Scorsese",
                                    "Francis Ford Coppola",
                                ],
                                0,
                            ),
                            question(
                                "movies-2",
                                "Which movie features a character named Jack Dawson?",
                                ["The Revenant", "Inception", "Titanic", "The Great Gatsby"],
                                2,
                            ),
                        ],
                    ),
                ],
            },
        },
    ]
}
