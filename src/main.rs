use institute_core::app::{
    ConfirmPrompt, CourseDetailController, DashboardController, FeeFormController, Route,
};
use institute_core::auth::AuthContext;
use institute_core::client::create_client;
use institute_core::error::Result;
use institute_core::interface::GatewayApi;
use institute_core::model::structs::Course;
use institute_core::notify::{Notice, NoticeLevel, NotificationSink};
use tracing_subscriber::EnvFilter;

struct Terminal;

impl NotificationSink for Terminal {
    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => println!("[info] {}", notice.message),
            NoticeLevel::Success => println!("[ok] {}", notice.message),
            NoticeLevel::Error => eprintln!("[error] {}", notice.message),
        }
    }
}

struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        println!("{message} [y/N]");
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }
}

fn print_usage(program: &str) {
    println!("usage: {program} <command>");
    println!("  dashboard");
    println!("  courses");
    println!("  course <id>");
    println!("  delete-course <id>");
    println!("  collect-fee <fullName> <amount> <phone> <remark> <courseId>");
    println!();
    println!("Session token comes from INSTITUTE_TOKEN or an stoken file.");
}

fn print_courses(courses: &[Course]) {
    println!("==================courses==================");
    for course in courses {
        println!(
            "{:<26}{:<12}{:<14}{:<30}",
            course.course_name, course.price, course.starting_date, course.id
        );
    }
    println!("===========================================");
}

fn print_route(route: &Route) {
    match route {
        Route::CourseList => println!("-> course list"),
        Route::CourseDetail(id) => println!("-> course details {id}"),
        Route::CourseEdit(id) => println!("-> edit course {id}"),
        Route::StudentList => println!("-> student list"),
        Route::StudentDetail(id) => println!("-> student details {id}"),
        Route::PaymentHistory => println!("-> payment history"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage(&args[0]);
        return Ok(());
    }

    let auth = AuthContext::from_store()?;
    let client = create_client(auth)?;
    let mut notices = Terminal;

    match args[1].as_str() {
        "dashboard" => {
            let mut dashboard = DashboardController::new();
            dashboard.load(&client).await;
            if dashboard.loading() {
                eprintln!("[error] Failed to load the dashboard");
                return Ok(());
            }

            let [collected, remaining, baseline] = dashboard.chart_segments();
            let (students, courses) = dashboard.totals();
            println!("=====================================");
            println!("Total Amount Collected: {collected} INR");
            println!("Remaining Amount: {remaining} INR");
            println!("Comparison Amount: {baseline} INR");
            println!("Students: {students}  Courses: {courses}");
            println!("=====================================");
            for student in dashboard.recent_students() {
                println!("{:<24}{:<16}{}", student.full_name, student.phone, student.email);
            }
        }
        "courses" => {
            let value = client.all_courses().await?;
            let courses: Vec<Course> = serde_json::from_value(value["courses"].clone())?;
            print_courses(&courses);
        }
        "course" => {
            let Some(id) = args.get(2) else {
                print_usage(&args[0]);
                return Ok(());
            };
            let mut detail = CourseDetailController::new(id.clone());
            detail.load(&client).await;
            let Some(course) = detail.course.as_ref() else {
                eprintln!("[error] Failed to load course {id}");
                return Ok(());
            };
            println!("{}", course.course_name);
            println!("Price: {}", course.price);
            println!("Start Date: {}", course.starting_date);
            println!("End Date: {}", course.end_date);
            println!("{}", course.description);
            println!("---------- enrolled students ----------");
            for student in &detail.roster {
                println!("{:<24}{:<16}{}", student.full_name, student.phone, student.email);
            }
        }
        "delete-course" => {
            let Some(id) = args.get(2) else {
                print_usage(&args[0]);
                return Ok(());
            };
            let mut detail = CourseDetailController::new(id.clone());
            detail.load(&client).await;
            if detail.loading() {
                eprintln!("[error] Failed to load course {id}");
                return Ok(());
            }
            let mut prompt = StdinPrompt;
            if let Some(route) = detail.delete(&client, &mut prompt, &mut notices).await {
                print_route(&route);
            }
        }
        "collect-fee" => {
            if args.len() < 7 {
                print_usage(&args[0]);
                return Ok(());
            }
            let mut form = FeeFormController::new();
            form.full_name = args[2].clone();
            form.set_amount(&args[3]);
            form.set_phone(&args[4]);
            form.remark = args[5].clone();
            form.course_id = args[6].clone();

            if !form.ready() {
                eprintln!("[error] amount and phone must be digits only");
                return Ok(());
            }

            if let Some(route) = form.submit(&client, &mut notices).await {
                print_route(&route);
            }
        }
        _ => print_usage(&args[0]),
    }

    Ok(())
}
