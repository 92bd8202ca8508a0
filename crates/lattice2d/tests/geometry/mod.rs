mod broad_phase;
