
mod release_calendar_test;
mod series_research_test;
