use tracing::{info, instrument, warn};

use complaintdesk_auth::Identity;
use complaintdesk_core::{AppError, hash_password, verify_dummy_password, verify_password};
use complaintdesk_db::{AdminRepository, StudentRepository};
use complaintdesk_models::{AdminLoginForm, LoginForm, SignupForm, Student};

pub struct AuthService;

impl AuthService {
    /// Registers a student. Fails with [`AppError::DuplicateUser`] when the
    /// email is taken, leaving the existing record untouched.
    #[instrument(skip(students, form), fields(email = %form.email))]
    pub async fn signup(
        students: &dyn StudentRepository,
        form: SignupForm,
    ) -> Result<Student, AppError> {
        if students.find_by_email(&form.email).await?.is_some() {
            warn!("Signup rejected, email already registered");
            return Err(AppError::DuplicateUser);
        }

        let hashed_password = hash_password(&form.password)?;
        let student = students.insert(&form.email, &hashed_password).await?;

        info!(student_id = %student.id, "Student registered");
        Ok(student)
    }

    #[instrument(skip(students, form), fields(email = %form.email))]
    pub async fn login(
        students: &dyn StudentRepository,
        form: LoginForm,
    ) -> Result<Identity, AppError> {
        let Some(student) = students.find_by_email(&form.email).await? else {
            verify_dummy_password(&form.password);
            warn!("Student login failed, unknown email");
            return Err(AppError::invalid_student_credentials());
        };

        if !verify_password(&form.password, &student.password)? {
            warn!(student_id = %student.id, "Student login failed, wrong password");
            return Err(AppError::invalid_student_credentials());
        }

        info!(student_id = %student.id, "Student logged in");
        Ok(Identity::Student(student.id))
    }

    #[instrument(skip(admins, form), fields(username = %form.username))]
    pub async fn admin_login(
        admins: &dyn AdminRepository,
        form: AdminLoginForm,
    ) -> Result<Identity, AppError> {
        let Some(admin) = admins.find_by_username(&form.username).await? else {
            verify_dummy_password(&form.password);
            warn!("Admin login failed, unknown username");
            return Err(AppError::invalid_admin_credentials());
        };

        if !verify_password(&form.password, &admin.password)? {
            warn!(admin_id = %admin.id, "Admin login failed, wrong password");
            return Err(AppError::invalid_admin_credentials());
        }

        info!(admin_id = %admin.id, "Admin logged in");
        Ok(Identity::Admin(admin.id))
    }
}
