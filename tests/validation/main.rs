mod samples;
mod scenarios;
