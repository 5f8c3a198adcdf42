mod prayer;
