//! The fixed catalog of commands understood by the prompt.
//!
//! Each command fixes its token, its exact argument count and the query it
//! runs. The catalog is the single source of truth for which commands exist.

/// A command from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// All students' first and last names
    Demo,
    /// Courses taken by a student id
    ViewSubjects,
    /// Street and city for a first name and surname
    LookupAddress,
    /// Review scores and text for a student id
    ListReviews,
    /// Courses taught by a teacher id
    ListCourses,
    /// Students with an incomplete enrollment
    ListIncomplete,
    /// Students who completed a course with a mark of 30 or below
    ListFailing,
    /// Leave the prompt
    Exit,
}

const DEMO_SQL: &str = "SELECT first_name, last_name FROM Student";

const VIEW_SUBJECTS_SQL: &str = "\
SELECT course_name
FROM Course
JOIN StudentCourse ON Course.course_code = StudentCourse.course_code
WHERE student_id = ?";

const LOOKUP_ADDRESS_SQL: &str = "\
SELECT street, city
FROM Address
JOIN Student ON Student.address_id = Address.address_id
WHERE first_name = ? AND last_name = ?";

const LIST_REVIEWS_SQL: &str = "\
SELECT completeness, efficiency, style, documentation, review_text
FROM Review
WHERE student_id = ?";

const LIST_COURSES_SQL: &str = "\
SELECT course_name
FROM Course
WHERE teacher_id = ?";

const LIST_INCOMPLETE_SQL: &str = "\
SELECT Student.student_id, first_name, last_name, email, course_name
FROM Student
JOIN StudentCourse ON Student.student_id = StudentCourse.student_id
JOIN Course ON StudentCourse.course_code = Course.course_code
WHERE is_complete = 0";

const LIST_FAILING_SQL: &str = "\
SELECT Student.student_id, first_name, last_name, email, course_name, mark
FROM Student
JOIN StudentCourse ON Student.student_id = StudentCourse.student_id
JOIN Course ON StudentCourse.course_code = Course.course_code
WHERE is_complete = 1 AND mark <= 30";

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 8] = [
        Command::Demo,
        Command::ViewSubjects,
        Command::LookupAddress,
        Command::ListReviews,
        Command::ListCourses,
        Command::ListIncomplete,
        Command::ListFailing,
        Command::Exit,
    ];

    /// Resolve a command token. Unknown tokens yield `None`.
    pub fn lookup(token: &str) -> Option<Command> {
        Self::ALL.into_iter().find(|cmd| cmd.token() == token)
    }

    pub fn token(self) -> &'static str {
        match self {
            Command::Demo => "d",
            Command::ViewSubjects => "vs",
            Command::LookupAddress => "la",
            Command::ListReviews => "lr",
            Command::ListCourses => "lc",
            Command::ListIncomplete => "lnc",
            Command::ListFailing => "lf",
            Command::Exit => "e",
        }
    }

    /// Exact number of arguments the command requires.
    pub fn arity(self) -> usize {
        match self {
            Command::ViewSubjects | Command::ListReviews | Command::ListCourses => 1,
            Command::LookupAddress => 2,
            Command::Demo | Command::ListIncomplete | Command::ListFailing | Command::Exit => 0,
        }
    }

    /// The parameterized query, or `None` for commands that don't touch the database.
    pub fn template(self) -> Option<&'static str> {
        match self {
            Command::Demo => Some(DEMO_SQL),
            Command::ViewSubjects => Some(VIEW_SUBJECTS_SQL),
            Command::LookupAddress => Some(LOOKUP_ADDRESS_SQL),
            Command::ListReviews => Some(LIST_REVIEWS_SQL),
            Command::ListCourses => Some(LIST_COURSES_SQL),
            Command::ListIncomplete => Some(LIST_INCOMPLETE_SQL),
            Command::ListFailing => Some(LIST_FAILING_SQL),
            Command::Exit => None,
        }
    }

    /// Whether the prompt offers to store this command's result.
    pub fn offers_export(self) -> bool {
        !matches!(self, Command::Demo | Command::Exit)
    }

    /// Argument placeholders and description shown in the menu.
    fn usage(self) -> (&'static str, &'static str) {
        match self {
            Command::Demo => ("", "demo"),
            Command::ViewSubjects => ("<student_id>", "view subjects taken by a student"),
            Command::LookupAddress => (
                "<firstname> <surname>",
                "lookup address for a given firstname and surname",
            ),
            Command::ListReviews => ("<student_id>", "list reviews for a given student_id"),
            Command::ListCourses => ("<teacher_id>", "list all courses taught by teacher_id"),
            Command::ListIncomplete => ("", "list all students who haven't completed their course"),
            Command::ListFailing => (
                "",
                "list all students who have completed their course and achieved 30 or below",
            ),
            Command::Exit => ("", "exit this program"),
        }
    }
}

/// The menu printed before each prompt.
pub fn usage_menu() -> String {
    let mut lines = vec!["What would you like to do?".to_string(), String::new()];
    for cmd in Command::ALL {
        let (params, description) = cmd.usage();
        let invocation = format!("{} {}", cmd.token(), params);
        lines.push(format!("{:<26} - {}", invocation.trim_end(), description));
    }
    lines.push(String::new());
    lines.join("\n")
}
