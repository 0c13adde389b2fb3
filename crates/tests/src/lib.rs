
#[cfg(test)]
mod save_step_tests;

#[cfg(test)]
mod hydration_tests;


#[cfg(test)]
mod document_upload_tests;

#[cfg(test)]
mod case_status_tests;
